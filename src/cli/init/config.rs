//! Configuration file generation.
//!
//! Creates a commented site.toml for new documentation sites.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::cli::args::CONFIG_FILE;

/// Starter configuration. Every optional key is shown with a comment.
const TEMPLATE: &str = r#"# Site metadata
title = "FolderFlow"
tagline = "Organize, automate, and extend your workflows"
favicon = "img/folderflow.ico"

# Production URL, origin only. A path here becomes `base_path` when
# `base_path` is not set.
url = "https://polocto.github.io"
base_path = "/FolderFlow/"

# GitHub pages deployment (usually your org/user and repo name)
organization = "polocto"
project = "FolderFlow"

# ignore | warn | error
on_broken_links = "error"

[markdown.hooks]
on_broken_markdown_links = "warn"

# Even without translations, `default_locale` sets the html lang.
[i18n]
default_locale = "en"
locales = ["en"]

[future]
v4 = true

[preset]
blog = false

[preset.docs]
sidebar_path = "./sidebars.ts"
# Remove to drop the "edit this page" links.
edit_url = "https://github.com/polocto/FolderFlow/tree/main/docs"
route_base_path = ""
last_version = "current"

[preset.docs.versions.current]
label = "Next"
path = "next"

[preset.theme]
custom_css = "./src/css/custom.css"

[theme]
# Social card
image = "img/folderflow.svg"

[theme.color_mode]
respect_prefers_color_scheme = true

[theme.navbar]
title = "FolderFlow"
logo = "img/folderflow.svg"

[[theme.navbar.items]]
type = "sidebar_link"
sidebar_id = "tutorialSidebar"
label = "User"

[[theme.navbar.items]]
type = "sidebar_link"
sidebar_id = "developperSideBar"
label = "Developper"

[[theme.navbar.items]]
type = "version_dropdown"
position = "right"

[[theme.navbar.items]]
type = "external_link"
href = "https://github.com/polocto/FolderFlow"
label = "GitHub"
position = "right"

[theme.footer]
style = "dark"
# `{year}` and `{title}` are substituted when resolving.
copyright = "Copyright © {year} {title}."

[[theme.footer.links]]
title = "Docs"
items = [
    { label = "User Guide", to = "/user-guide/" },
    { label = "Developer Guide", to = "/dev-guide/" },
]

[[theme.footer.links]]
title = "Community"
items = [
    { label = "GitHub Issues", href = "https://github.com/polocto/FolderFlow/issues" },
]

[[theme.footer.links]]
title = "More"
items = [{ label = "GitHub", href = "https://github.com/polocto/FolderFlow" }]

[theme.prism]
theme = "github"
dark_theme = "dracula"
"#;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(TEMPLATE);
    out
}

/// Write the starter site.toml into `root`, creating the directory if needed.
pub fn write_config(root: &Path) -> Result<()> {
    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;

    let path = root.join(CONFIG_FILE);
    fs::write(&path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}
