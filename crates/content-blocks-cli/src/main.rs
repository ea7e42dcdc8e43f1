use anyhow::Result;
use content_blocks_config::Config;
use content_blocks_engine::{
    MixedKind, SegmentOptions, classify, io, parse_mixed_content_with, parse_smart_table,
    to_list_blocks,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

/// How the selected file is parsed for the preview pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PreviewMode {
    /// Mixed-document segmentation into typed blocks
    Auto,
    /// Numbered-list normalization
    NumberedList,
    /// Smart-paste table inference
    Table,
}

impl PreviewMode {
    fn next(self) -> Self {
        match self {
            PreviewMode::Auto => PreviewMode::NumberedList,
            PreviewMode::NumberedList => PreviewMode::Table,
            PreviewMode::Table => PreviewMode::Auto,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            PreviewMode::Auto => "auto-detect",
            PreviewMode::NumberedList => "numbered list",
            PreviewMode::Table => "table",
        }
    }
}

struct App {
    content_path: PathBuf,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    mode: PreviewMode,
    segment_options: SegmentOptions,
    preview: Vec<String>,
}

impl App {
    fn new(content_path: PathBuf, segment_options: SegmentOptions) -> Result<Self> {
        let scanned = io::scan_content_files(&content_path)?;
        let files: Vec<RelativePathBuf> = scanned
            .iter()
            .filter_map(|path| path.strip_prefix(&content_path).ok())
            .filter_map(|path| RelativePathBuf::from_path(path).ok())
            .collect();

        let mut app = Self {
            content_path,
            files,
            file_list_state: ListState::default(),
            mode: PreviewMode::Auto,
            segment_options,
            preview: Vec::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_preview();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_preview();
    }

    fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
        self.update_preview();
    }

    fn update_preview(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            self.preview = Vec::new();
            return;
        };

        match io::read_file(file, &self.content_path) {
            Ok(content) => {
                self.preview = render_preview(&content, self.mode, &self.segment_options);
            }
            Err(e) => {
                self.preview = vec![format!("Error reading file: {}", e)];
            }
        }
    }
}

fn render_preview(content: &str, mode: PreviewMode, options: &SegmentOptions) -> Vec<String> {
    match mode {
        PreviewMode::Auto => render_mixed(content, options),
        PreviewMode::NumberedList => render_list(content),
        PreviewMode::Table => render_table(content),
    }
}

fn render_list(content: &str) -> Vec<String> {
    let blocks = to_list_blocks(content);
    if blocks.is_empty() {
        return vec!["No numbered items detected".to_string()];
    }

    let mut lines = Vec::new();
    for block in blocks {
        lines.push(format!("{}. {}", block.number, block.main_text));
        for sub in &block.sub_items {
            // Original glyph, for display fidelity
            lines.push(format!("   {} {}", sub.bullet, sub.text));
        }
    }
    lines
}

fn render_table(content: &str) -> Vec<String> {
    let Some(table) = parse_smart_table(content) else {
        return vec!["No table structure detected".to_string()];
    };

    let mut lines = Vec::new();
    if let Some(title) = &table.title {
        lines.push(title.clone());
        lines.push(String::new());
    }

    let col3_header = table.headers.col3.clone().unwrap_or_default();
    let width1 = column_width(table.headers.col1.as_str(), table.rows.iter().map(|r| r.col1.as_str()));
    let width2 = column_width(table.headers.col2.as_str(), table.rows.iter().map(|r| r.col2.as_str()));

    let header = if table.column_count == 3 {
        format!(
            "{:<width1$}  {:<width2$}  {}",
            table.headers.col1, table.headers.col2, col3_header
        )
    } else {
        format!("{:<width1$}  {}", table.headers.col1, table.headers.col2)
    };
    lines.push(header.trim_end().to_string());

    for row in &table.rows {
        let rendered = match &row.col3 {
            Some(col3) => format!("{:<width1$}  {:<width2$}  {}", row.col1, row.col2, col3),
            None => format!("{:<width1$}  {}", row.col1, row.col2),
        };
        lines.push(rendered.trim_end().to_string());
    }
    lines
}

fn column_width<'a>(header: &'a str, fields: impl Iterator<Item = &'a str>) -> usize {
    fields
        .chain(std::iter::once(header))
        .map(|field| field.chars().count())
        .max()
        .unwrap_or(0)
}

fn render_mixed(content: &str, options: &SegmentOptions) -> Vec<String> {
    let blocks = parse_mixed_content_with(content, options);
    if blocks.is_empty() {
        return vec!["Nothing could be parsed".to_string()];
    }

    let mut lines = Vec::new();
    for block in &blocks {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        if let Some(title) = &block.title {
            lines.push(format!("## {}", title));
        }
        match block.kind {
            MixedKind::Title => lines.push(format!("## {}", block.content)),
            MixedKind::Paragraph => lines.extend(block.content.lines().map(String::from)),
            MixedKind::Bullets => {
                for line in block.content.lines() {
                    lines.push(format!("• {}", classify(line).text()));
                }
            }
            MixedKind::Numbered => lines.extend(render_list(&block.content)),
        }
    }
    lines
}

fn main() -> Result<()> {
    // Determine content path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let content_path;
    let from_config;
    let mut segment_options = SegmentOptions::default();

    if args.len() == 2 {
        // CLI argument provided - use it, with config supplying tuning only
        content_path = PathBuf::from(&args[1]);
        from_config = false;
        if let Ok(Some(config)) = Config::load() {
            segment_options.max_title_words = config.segmenter.max_title_words;
        }
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                content_path = config.content_path;
                segment_options.max_title_words = config.segmenter.max_title_words;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No content path provided and no config file found");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <content-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [content-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate content directory using engine
    if let Err(e) = io::validate_content_dir(&content_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Content path '{}'{} is invalid: {e}",
            content_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(content_path, segment_options)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('m') | KeyCode::Tab => app.cycle_mode(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(vec![Line::from(vec![Span::raw(file.as_str().to_string())])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Preview panel
    let preview_text = if app.preview.is_empty() {
        vec![Line::from("Select a file to preview its parsed content")]
    } else {
        app.preview
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let preview = Paragraph::new(preview_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Preview [{}]", app.mode.label())),
        )
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(preview, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("m/Tab: Parse mode"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
