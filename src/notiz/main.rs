use chrono::{DateTime, Local, Utc};
use clap::Parser;
use colored::Colorize;
use console::Term;
use notiz::api::NotesApi;
use notiz::clipboard::copy_to_clipboard;
use notiz::config::NotizConfig;
use notiz::editor::{edit_note, EditorContent};
use notiz::error::{NotizError, Result};
use notiz::init::{self, NotizContext};
use notiz::model::NoteDraft;
use notiz::query::ListPage;
use notiz::render::render_markdown;
use notiz::session::NoteSession;
use notiz::store::fs::FileBackend;
use notiz::store::NoteStore;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init::initialize()?;

    let store = NoteStore::new(FileBackend::new(&ctx.home), &ctx.config.share_base_url);
    let mut session = NoteSession::new(NotesApi::new(store), ctx.config.initial_load_retries);

    match cli.command {
        Some(Commands::Create {
            title,
            content,
            shared,
            no_editor,
        }) => handle_create(&mut session, title, content, shared, no_editor),
        Some(Commands::List { query, page }) => handle_list(&mut session, query, page),
        Some(Commands::View { indexes }) => handle_view(&mut session, &indexes),
        Some(Commands::Edit {
            index,
            title,
            content,
        }) => handle_edit(&mut session, index, title, content),
        Some(Commands::Delete { indexes }) => handle_delete(&mut session, &indexes),
        Some(Commands::Share { index }) => handle_share(&mut session, index),
        Some(Commands::Shared { id }) => handle_shared(&session, &id),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&mut session, None, None),
    }
}

fn handle_create(
    session: &mut NoteSession<FileBackend>,
    title: Option<String>,
    content: Option<String>,
    shared: bool,
    no_editor: bool,
) -> Result<()> {
    let (title, content) = match (title, content) {
        (Some(title), Some(content)) => (title, content),
        (title, content) if no_editor => {
            (title.unwrap_or_default(), content.unwrap_or_default())
        }
        (title, content) => {
            let initial =
                EditorContent::new(title.unwrap_or_default(), content.unwrap_or_default());
            let edited = edit_note(&initial)?;
            (edited.title, edited.content)
        }
    };

    let mut draft = NoteDraft::new(title, content);
    if shared {
        draft.shared = Some(true);
    }

    let note = session.create(draft)?;
    println!("{}", format!("Note created: {}", note.title).green());
    Ok(())
}

fn handle_list(
    session: &mut NoteSession<FileBackend>,
    query: Option<String>,
    page: Option<usize>,
) -> Result<()> {
    if let Some(query) = query {
        session.search(query);
    }
    if let Some(page) = page {
        session.go_to_page(page)?;
    }

    let page = session.list_page()?;
    if page.shelf_is_empty() {
        println!("No notes yet. Start by creating your first note!");
        return Ok(());
    }
    if page.nothing_matched() {
        println!("No notes found matching your search.");
        return Ok(());
    }

    print_notes(&page);
    Ok(())
}

fn handle_view(session: &mut NoteSession<FileBackend>, indexes: &[usize]) -> Result<()> {
    let mut notes = Vec::with_capacity(indexes.len());
    for &index in indexes {
        notes.push(session.resolve(index)?);
    }

    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }
        print_note_header(&note.title, note.created_at, note.shared);
        println!();
        print!("{}", render_markdown(&note.content));
    }
    Ok(())
}

fn handle_edit(
    session: &mut NoteSession<FileBackend>,
    index: usize,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let current = session.resolve(index)?;

    let (title, content) = match (title, content) {
        (Some(title), Some(content)) => (title, content),
        (title, content) => {
            let initial = EditorContent::new(
                title.unwrap_or_else(|| current.title.clone()),
                content.unwrap_or_else(|| current.content.clone()),
            );
            let edited = edit_note(&initial)?;
            (edited.title, edited.content)
        }
    };

    let note = session.edit(index, title, content)?;
    println!("{}", format!("Note updated: {}", note.title).green());
    Ok(())
}

fn handle_delete(session: &mut NoteSession<FileBackend>, indexes: &[usize]) -> Result<()> {
    let deleted = session.delete(indexes)?;
    for note in &deleted {
        println!("{}", format!("Note deleted: {}", note.title).green());
    }
    Ok(())
}

fn handle_share(session: &mut NoteSession<FileBackend>, index: usize) -> Result<()> {
    let (note, share) = session.share(index)?;
    println!("{}", format!("Note shared: {}", note.title).green());
    println!("{}", share.link);

    match copy_to_clipboard(&share.link) {
        Ok(()) => println!("{}", "Share link copied to clipboard.".dimmed()),
        Err(e) => eprintln!("Warning: Failed to copy to clipboard: {}", e),
    }
    Ok(())
}

fn handle_shared(session: &NoteSession<FileBackend>, id: &str) -> Result<()> {
    let note = session.shared_note(id)?;
    print_note_header(&note.title, note.created_at, note.shared);
    println!();
    print!("{}", render_markdown(&note.content));
    Ok(())
}

fn handle_config(ctx: &NotizContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key.as_deref(), value) {
        (None, _) => {
            println!("share-base-url = {}", ctx.config.share_base_url);
            println!("load-retries = {}", ctx.config.initial_load_retries);
        }
        (Some("share-base-url"), None) => println!("{}", ctx.config.share_base_url),
        (Some("share-base-url"), Some(value)) => {
            let config = NotizConfig {
                share_base_url: value,
                ..ctx.config.clone()
            };
            config.save(&ctx.config_path())?;
            println!("{}", "Config updated.".green());
        }
        (Some("load-retries"), None) => println!("{}", ctx.config.initial_load_retries),
        (Some("load-retries"), Some(value)) => {
            let retries = value
                .parse()
                .map_err(|_| NotizError::App(format!("Invalid value for load-retries: {}", value)))?;
            let config = NotizConfig {
                initial_load_retries: retries,
                ..ctx.config.clone()
            };
            config.save(&ctx.config_path())?;
            println!("{}", "Config updated.".green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const SHARED_MARKER: &str = "»";

fn line_width() -> usize {
    Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(LINE_WIDTH)
}

fn print_notes(page: &ListPage) {
    let width = line_width();

    for item in &page.items {
        let idx_str = format!("{:>3}. ", item.index);
        let marker = if item.note.shared {
            format!("{} ", SHARED_MARKER)
        } else {
            "  ".to_string()
        };

        let time_ago = format_time_ago(item.note.created_at);

        let preview: String = item
            .note
            .content
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_content = if preview.is_empty() {
            item.note.title.clone()
        } else {
            format!("{} {}", item.note.title, preview)
        };

        let fixed_width = idx_str.width() + marker.width() + TIME_WIDTH;
        let available = width.saturating_sub(fixed_width);
        let shown = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(shown.width());

        println!(
            "{}{}{}{}{}",
            idx_str,
            shown,
            " ".repeat(padding),
            marker.dimmed(),
            time_ago.dimmed()
        );
    }

    println!();
    let mut footer = format!("{}-{} of {}", page.start(), page.end(), page.matching);
    if page.page_count > 1 {
        footer.push_str(&format!(" · page {}/{}", page.page, page.page_count));
    }
    println!("{}", footer.dimmed());
}

fn print_note_header(title: &str, created_at: DateTime<Utc>, shared: bool) {
    println!("{}", title.bold());
    let mut meta = created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();
    if shared {
        meta.push_str(" · shared");
    }
    println!("{}", meta.dimmed());
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
