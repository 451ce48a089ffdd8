//! Navigation over the virtual file system, plus the editors that open files

use snhos_core::vfs::ROOT;
use snhos_core::{VfsError, VfsNode};

use super::{Invocation, Response};
use crate::modes::{Mode, NanoEditor, VimEditor};
use crate::shell::output::{OutputLine, Segment, Tone};
use crate::shell::Shell;

pub(super) fn ls(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    match shell.fs().list(shell.cwd()) {
        Ok(entries) => {
            let mut line = OutputLine::default();
            for (idx, entry) in entries.iter().enumerate() {
                if idx > 0 {
                    line = line.then(Tone::Normal, "  ");
                }
                let tone = if entry.is_dir { Tone::Primary } else { Tone::Normal };
                line.segments.push(Segment {
                    text: entry.to_string(),
                    tone,
                    bold: entry.is_dir,
                });
            }
            Response::line(line)
        }
        Err(_) => Response::error("Error reading directory."),
    }
}

pub(super) fn cd(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    match inv.arg(0) {
        None | Some(ROOT) => {
            shell.set_cwd(Vec::new());
            Response::empty()
        }
        Some("..") => {
            let mut cwd = shell.cwd().to_vec();
            cwd.pop();
            shell.set_cwd(cwd);
            Response::empty()
        }
        Some(target) => match shell.fs().child_dir(shell.cwd(), target) {
            Ok(dir) => {
                let mut cwd = shell.cwd().to_vec();
                cwd.push(dir);
                shell.set_cwd(cwd);
                Response::empty()
            }
            Err(_) => Response::error(format!("cd: no such file or directory: {target}")),
        },
    }
}

pub(super) fn pwd(shell: &mut Shell, _inv: &Invocation<'_>) -> Response {
    let mut path = format!("/home/{}", shell.user());
    for dir in shell.cwd() {
        path.push('/');
        path.push_str(dir);
    }
    Response::line(OutputLine::plain(path))
}

pub(super) fn cat(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let Some(target) = inv.arg(0) else {
        return Response::error("Usage: cat [filename]");
    };
    match shell.fs().read(shell.cwd(), target) {
        Ok(content) => Response::lines(content.split('\n').map(OutputLine::plain).collect()),
        Err(VfsError::IsADirectory(_)) => Response::error(format!("cat: {target}: Is a directory")),
        Err(_) => Response::error(format!("cat: {target}: No such file or directory")),
    }
}

pub(super) fn grep(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    let term = inv.rest(" ").replace('"', "");
    if term.is_empty() {
        return Response::error("Usage: grep \"search term\" [file]");
    }
    let hits = shell.fs().grep(&term);
    if hits.is_empty() {
        return Response::line(OutputLine::faint("No matches found."));
    }
    Response::lines(hits.iter().map(|hit| OutputLine::plain(hit.to_string())).collect())
}

/// What an editor should open: `(name, content)`, or an error response
fn editor_target(
    shell: &Shell,
    inv: &Invocation<'_>,
) -> Result<(Option<String>, String), Response> {
    let Some(target) = inv.arg(0) else {
        return Ok((None, String::new()));
    };
    match shell.fs().lookup(shell.cwd(), target) {
        Ok(VfsNode::File { content }) => Ok((Some(target.to_string()), content.clone())),
        Ok(VfsNode::Directory { .. }) => Err(Response::error(format!(
            "{}: {target}: Is a directory",
            inv.name
        ))),
        // unknown names open an empty buffer under that name
        Err(_) => Ok((Some(target.to_string()), String::new())),
    }
}

pub(super) fn vim(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    match editor_target(shell, inv) {
        Ok((name, content)) => {
            Response::enter(Mode::Vim(VimEditor::new(name.as_deref(), &content)))
        }
        Err(response) => response,
    }
}

pub(super) fn nano(shell: &mut Shell, inv: &Invocation<'_>) -> Response {
    match editor_target(shell, inv) {
        Ok((name, content)) => {
            Response::enter(Mode::Nano(NanoEditor::new(name.as_deref(), &content)))
        }
        Err(response) => response,
    }
}
