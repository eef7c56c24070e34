use crate::flow::flow_model::Notice;

/// Copy-to-clipboard collaborator. Reports success; never fails loudly.
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> bool;
}

/// The desktop clipboard, opened on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if self.inner.is_none() {
            match arboard::Clipboard::new() {
                Ok(cb) => self.inner = Some(cb),
                Err(e) => {
                    eprintln!("Warning: clipboard unavailable: {}", e);
                    return false;
                }
            }
        }

        match self.inner.as_mut() {
            Some(cb) => match cb.set_text(text.to_string()) {
                Ok(()) => true,
                Err(e) => {
                    eprintln!("Warning: clipboard write failed: {}", e);
                    false
                }
            },
            None => false,
        }
    }
}

/// In-process clipboard for scripted sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write.
    pub fn denied() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> bool {
        if self.fail {
            return false;
        }
        self.contents = Some(text.to_string());
        true
    }
}

/// Copy `text` unless it is empty.
pub fn copy_text(clipboard: &mut dyn Clipboard, text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    clipboard.copy(text)
}

pub fn copy_link(clipboard: &mut dyn Clipboard, link: &str) -> Notice {
    if copy_text(clipboard, link) {
        Notice::LinkCopied
    } else {
        Notice::LinkCopyFailed
    }
}

pub fn copy_reply(clipboard: &mut dyn Clipboard, reply: &str) -> Notice {
    if copy_text(clipboard, reply) {
        Notice::ReplyCopied
    } else {
        Notice::ReplyCopyFailed
    }
}
