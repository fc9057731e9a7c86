//! Soulingo CLI: a thin render surface over the tutoring core.
//!
//! Reads lines from stdin, routes them through the session, and prints the
//! transcript as it grows. `/image <path> [prompt]` uploads an image for
//! analysis; `/quit` exits.

mod config;

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use providers::GeminiClient;
use shared::{ImageFile, Sender, Turn, TurnContent};
use tracing_subscriber::EnvFilter;
use tutor::{ChatSession, TutorService};

fn mime_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading image {}", path.display()))?;
    Ok(ImageFile {
        bytes,
        mime_type: mime_type_for(path).to_string(),
        file_name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string()),
    })
}

fn render_turn(turn: &Turn) {
    let speaker = match turn.sender {
        Sender::User => "Sen",
        Sender::Soulingo => "Soulingo",
    };
    match &turn.content {
        TurnContent::Text { text } | TurnContent::GrammarCorrection { text } => {
            println!("{speaker}: {text}\n");
        }
        TurnContent::ImageAnalysis(analysis) => {
            println!("{speaker}: ({})", analysis.image_prompt);
            for term in &analysis.identified_objects {
                println!("  **{}** (Türkçesi: {})", term.english, term.turkish);
                println!("  Example: '{}'", term.sentence);
            }
            println!();
        }
    }
}

/// Print any turns appended since the last render.
fn render_new_turns(session: &ChatSession, rendered: &mut usize) {
    for turn in &session.turns()[*rendered..] {
        render_turn(turn);
    }
    *rendered = session.turns().len();
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = config::load_settings();
    let client = GeminiClient::new(&settings.gemini)?;
    let tutor = TutorService::new(Arc::new(client));
    let mut session = ChatSession::new(tutor);
    let mut rendered = 0;

    render_new_turns(&session, &mut rendered);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);

        if line == "/quit" || line == "/exit" {
            break;
        }

        if let Some(rest) = line.strip_prefix("/image ") {
            let mut parts = rest.trim().splitn(2, ' ');
            let path = match parts.next().filter(|p| !p.is_empty()) {
                Some(p) => Path::new(p).to_path_buf(),
                None => {
                    eprintln!("kullanım: /image <dosya> [soru]");
                    continue;
                }
            };
            let prompt = parts.next().map(|p| p.trim().to_string());
            match read_image(&path) {
                Ok(image) => session.submit_image(image, prompt).await,
                Err(err) => {
                    eprintln!("resim okunamadı: {err:#}");
                    continue;
                }
            }
        } else {
            session.submit_text(line).await;
        }

        render_new_turns(&session, &mut rendered);
    }

    Ok(())
}
