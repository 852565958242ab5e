//! Banner printed when an edit session starts.

use crate::consts::{AUTHOR, REPO};
use crate::model::InternId;

/// What the edit banner shows.
pub struct BannerInfo<'a> {
    pub api_url: &'a str,
    pub intern: &'a InternId,
    pub config: &'a str,
}

pub fn banner_text(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║            I N T E R N S              ║
   ║        edit a participant record      ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   api       {}
   intern    {}
   config    {}

   type /help for commands
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.api_url,
        info.intern,
        info.config,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}
