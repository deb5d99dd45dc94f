use std::process::Command;

use crate::error::{NotizError, Result};

/// Copies `text` to the system clipboard.
/// macOS: pbcopy. Linux: xclip, then xsel. Windows: clip.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_to(Command::new("pbcopy"), text)
    }

    #[cfg(target_os = "linux")]
    {
        let mut xclip = Command::new("xclip");
        xclip.args(["-selection", "clipboard"]);
        match pipe_to(xclip, text) {
            Ok(()) => Ok(()),
            Err(_) => {
                let mut xsel = Command::new("xsel");
                xsel.args(["--clipboard", "--input"]);
                pipe_to(xsel, text)
            }
        }
    }

    #[cfg(target_os = "windows")]
    {
        pipe_to(Command::new("clip"), text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(NotizError::App(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

#[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
fn pipe_to(mut command: Command, text: &str) -> Result<()> {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = command
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|err| NotizError::App(format!("Failed to spawn clipboard command: {err}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|err| NotizError::App(format!("Failed to write to clipboard: {err}")))?;
    }

    let status = child
        .wait()
        .map_err(|err| NotizError::App(format!("Failed to wait for clipboard command: {err}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(NotizError::App(
            "Clipboard command exited with error".to_string(),
        ))
    }
}
