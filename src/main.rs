use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use rentry_raw::logging;
use rentry_raw::session::{PreviewId, Session};

/// Key file lives next to the working directory, a single plain-text line.
const KEY_PATH: &str = "api-key.txt";

/// Preview output is capped so a huge paste doesn't flood the terminal.
const PREVIEW_LIMIT: usize = 2000;

fn main() {
    // Initialize logging as early as possible.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = run() {
        eprintln!("rentry-raw error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // A corrupt key file is fatal; absence just means no key yet.
    let mut session = Session::open(KEY_PATH)?;

    println!("rentry raw downloader");
    let masked = session.masked_key();
    if masked.is_empty() {
        println!("api key: (not set)");
    } else {
        println!("api key: {}", masked);
    }
    println!("enter a rentry url or page id, `:key <value>` to set the api key, `:quit` to exit");

    let stdin = io::stdin();
    loop {
        print!("paste> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == ":quit" {
            return Ok(());
        }
        if let Some(raw) = line.strip_prefix(":key ") {
            match session.set_key(raw) {
                Ok(masked) => println!("api key: {}", masked),
                Err(err) => eprintln!("{}", err),
            }
            continue;
        }
        match session.fetch(line) {
            Ok(preview) => resolve_preview(&mut session, preview)?,
            Err(err) => eprintln!("{}", err),
        }
    }
}

/// Shows the fetched paste and prompts until it is saved or rejected.
fn resolve_preview(session: &mut Session, id: PreviewId) -> Result<()> {
    let (suggested, shown, truncated) = {
        let Some(paste) = session.preview(id) else {
            return Ok(());
        };
        let shown: String = paste.body.chars().take(PREVIEW_LIMIT).collect();
        let truncated = shown.len() < paste.body.len();
        (paste.file_name.clone(), shown, truncated)
    };

    println!("--- {} ---", suggested);
    println!("{}", shown);
    if truncated {
        println!("[...]");
    }
    println!("---");

    let stdin = io::stdin();
    loop {
        print!("save as [{}] (enter = save, n = reject, or another path): ", suggested);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 || line.trim().eq_ignore_ascii_case("n") {
            session.discard(id);
            println!("rejected");
            return Ok(());
        }
        let answer = line.trim();
        let dest = if answer.is_empty() {
            suggested.as_str()
        } else {
            answer
        };
        // A failed write keeps the preview pending, so the prompt comes back.
        match session.save(id, Path::new(dest)) {
            Ok(written) => {
                println!("saved {} bytes to {}", written, dest);
                return Ok(());
            }
            Err(err) => eprintln!("could not save to {}: {}", dest, err),
        }
    }
}
