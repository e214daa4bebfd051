//! Discard the saved draft

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::Folio;

/// Delete the saved draft and fall back to the built-in default.
///
/// Asks for confirmation unless `yes` is set.
pub async fn run(folio: &Folio, yes: bool) -> Result<()> {
    if !yes && !confirm("Delete the saved draft and restore the default content? [y/N] ")? {
        println!("Aborted.");
        return Ok(());
    }

    let mut state = folio.load_state().await;
    state.reset()?;
    println!("Reset to the built-in default content.");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::edit;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reset_clears_saved_draft() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        edit::set(&folio, "hero.name", "Someone", false).await.unwrap();
        assert!(folio.gateway().load().is_some());

        run(&folio, true).await.unwrap();
        assert!(folio.gateway().load().is_none());
    }
}
