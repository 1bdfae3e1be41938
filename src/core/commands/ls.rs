use std::fs::{self, DirEntry};
use std::io::Write;
use std::os::unix::fs::{FileTypeExt, PermissionsExt};
use std::path::{Path, PathBuf};

use inksac::prelude::Color;

use super::{Builtin, CommandContext, CommandError, Outcome};
use crate::core::terminal;
use crate::highlight::Highlighter;

/// Space between columns.
const COLUMN_GAP: usize = 2;
/// Terminal cells taken by an icon and the space after it.
const ICON_WIDTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Directory,
    Symlink,
    Device,
    Fifo,
    Socket,
    Executable,
    Text,
    Document,
    Image,
    Audio,
    Video,
    Archive,
    Source,
    Config,
    Other,
}

impl EntryKind {
    fn of(entry: &DirEntry) -> Self {
        let Ok(file_type) = entry.file_type() else {
            return EntryKind::Other;
        };

        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_block_device() || file_type.is_char_device() {
            EntryKind::Device
        } else if file_type.is_fifo() {
            EntryKind::Fifo
        } else if file_type.is_socket() {
            EntryKind::Socket
        } else if entry
            .metadata()
            .is_ok_and(|m| m.permissions().mode() & 0o111 != 0)
        {
            EntryKind::Executable
        } else {
            Self::by_extension(&entry.path())
        }
    }

    fn by_extension(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" | "md" | "log" | "csv" => EntryKind::Text,
            "pdf" | "doc" | "docx" | "odt" | "xls" | "xlsx" | "ods" | "ppt" | "pptx" | "odp" => {
                EntryKind::Document
            }
            "jpg" | "jpeg" | "png" | "gif" | "bmp" | "svg" => EntryKind::Image,
            "mp3" | "wav" | "flac" | "ogg" | "m4a" => EntryKind::Audio,
            "mp4" | "avi" | "mkv" | "mov" | "wmv" => EntryKind::Video,
            "zip" | "tar" | "gz" | "rar" | "7z" => EntryKind::Archive,
            "rs" | "go" | "py" | "js" | "ts" | "c" | "cpp" | "h" | "hpp" | "java" | "rb" | "sh"
            | "bash" | "zsh" | "html" | "htm" | "css" => EntryKind::Source,
            "json" | "yaml" | "yml" | "toml" | "xml" => EntryKind::Config,
            _ => EntryKind::Other,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            EntryKind::Directory => "📁",
            EntryKind::Symlink => "🔗",
            EntryKind::Device => "💽",
            EntryKind::Fifo => "📊",
            EntryKind::Socket => "🔌",
            EntryKind::Executable => "⚙️",
            EntryKind::Document => "📕",
            EntryKind::Image => "🖼️",
            EntryKind::Audio => "🎵",
            EntryKind::Video => "🎬",
            EntryKind::Archive => "📦",
            EntryKind::Source => "🔹",
            EntryKind::Config => "🔧",
            EntryKind::Text | EntryKind::Other => "📄",
        }
    }

    fn style(self) -> Option<(Color, bool)> {
        match self {
            EntryKind::Directory => Some((Color::Blue, true)),
            EntryKind::Symlink => Some((Color::Cyan, true)),
            EntryKind::Device | EntryKind::Fifo => Some((Color::Yellow, true)),
            EntryKind::Socket => Some((Color::Magenta, true)),
            EntryKind::Executable => Some((Color::Green, true)),
            EntryKind::Text => Some((Color::White, false)),
            EntryKind::Document | EntryKind::Archive => Some((Color::Red, false)),
            EntryKind::Image => Some((Color::Magenta, false)),
            EntryKind::Audio | EntryKind::Source => Some((Color::Cyan, false)),
            EntryKind::Video | EntryKind::Config => Some((Color::Yellow, false)),
            EntryKind::Other => None,
        }
    }
}

#[derive(Debug)]
struct Listed {
    name: String,
    kind: EntryKind,
}

impl Listed {
    fn width(&self) -> usize {
        self.name.chars().count() + ICON_WIDTH
    }

    fn render(&self, highlighter: &Highlighter) -> String {
        let text = format!("{} {}", self.kind.icon(), self.name);
        match self.kind.style() {
            Some((color, bold)) => highlighter.paint(&text, color, bold),
            None => text,
        }
    }
}

/// Reads `dir`, directories first, each group by name.
fn read_listing(dir: &Path) -> Result<Vec<Listed>, CommandError> {
    let entries = fs::read_dir(dir).map_err(|source| CommandError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut listed = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CommandError::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
        let kind = EntryKind::of(&entry);
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if kind == EntryKind::Directory {
            name.push('/');
        }
        listed.push(Listed { name, kind });
    }

    listed.sort_by(|a, b| {
        let a_dir = a.kind == EntryKind::Directory;
        let b_dir = b.kind == EntryKind::Directory;
        b_dir.cmp(&a_dir).then_with(|| a.name.cmp(&b.name))
    });
    Ok(listed)
}

/// Lays entries out row by row in as many columns as `term_width` allows.
fn write_grid(
    out: &mut dyn Write,
    listed: &[Listed],
    term_width: usize,
    highlighter: &Highlighter,
) -> std::io::Result<()> {
    let col_width = listed.iter().map(Listed::width).max().unwrap_or(0) + COLUMN_GAP;
    let columns = (term_width / col_width.max(1)).max(1);

    for row in listed.chunks(columns) {
        let mut line = String::new();
        for (i, item) in row.iter().enumerate() {
            line.push_str(&item.render(highlighter));
            if i + 1 < row.len() {
                line.push_str(&" ".repeat(col_width - item.width()));
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// `ls [dir]` rendered inside the shell. Any flag or pipe on the line hands
/// it to the system `ls` instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct LsCommand;

impl Builtin for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn claims(&self, args: &[String]) -> bool {
        !args.iter().any(|arg| arg.starts_with('-') || arg.contains('|'))
    }

    fn execute(&self, ctx: &mut CommandContext<'_>, args: &[String]) -> Result<Outcome, CommandError> {
        let dir = args
            .first()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let listed = read_listing(&dir)?;
        let width = terminal::size().unwrap_or_default().cols as usize;
        write_grid(ctx.stdout, &listed, width, &ctx.highlighter)?;
        Ok(Outcome::Continue)
    }
}
