use std::collections::VecDeque;
use std::fmt;
use std::io::BufRead;

use quick_xml::NsReader;
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use tracing::debug;

use super::{XmlOptions, XmlRoot, utils};
use crate::error::{CodecError, Result};

/// The start tag of an element, with its namespace already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementStart {
    namespace: Option<String>,
    local_name: String,
}

impl ElementStart {
    pub fn new(namespace: Option<&str>, local_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            local_name: local_name.into(),
        }
    }

    /// Namespace URI, or `None` for an element in no namespace.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn local_name(&self) -> &str {
        &self.local_name
    }
}

impl fmt::Display for ElementStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{{{}}}{}", namespace, self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}

/// Owned, namespace-resolved reader event.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Start(ElementStart),
    End,
    Text(String),
    Eof,
}

/// An element subtree consumed from the input and held for later parsing.
///
/// Used where an element cannot be interpreted until a sibling that may come
/// after it has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedElement {
    start: ElementStart,
    tokens: Vec<Token>,
}

impl CapturedElement {
    pub fn start(&self) -> &ElementStart {
        &self.start
    }

    /// Whether the element has any child elements.
    pub fn has_children(&self) -> bool {
        self.tokens.iter().any(|token| matches!(token, Token::Start(_)))
    }
}

/// Position of the reader that [`XmlReader::restore`] can return to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderMark {
    pending: usize,
    depth: usize,
}

/// Pull reader over namespace-resolved XML with element path tracking.
///
/// Elements are consumed in a strict nesting discipline: [`next_child`]
/// enters a child (its start tag consumed), and every entered element is left
/// by exactly one of [`close_element`], [`read_text`], [`skip_element`] or
/// [`capture_element`].
///
/// [`next_child`]: XmlReader::next_child
/// [`close_element`]: XmlReader::close_element
/// [`read_text`]: XmlReader::read_text
/// [`skip_element`]: XmlReader::skip_element
/// [`capture_element`]: XmlReader::capture_element
pub struct XmlReader<R: BufRead> {
    reader: NsReader<R>,
    buf: Vec<u8>,
    pending: VecDeque<Token>,
    path: Vec<String>,
    options: XmlOptions,
}

impl<R: BufRead> XmlReader<R> {
    pub fn new(source: R, options: XmlOptions) -> Self {
        let mut reader = NsReader::from_reader(source);
        let config = reader.config_mut();
        config.expand_empty_elements = true;
        config.check_end_names = true;
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            path: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &XmlOptions {
        &self.options
    }

    /// Slash-separated path of the currently entered elements.
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// Builds a `MalformedInput` error at the current path.
    pub fn malformed(&self, message: impl Into<String>) -> CodecError {
        malformed_at(&self.path, message)
    }

    /// Reads a whole document whose root element is `T`.
    pub fn read_document<T: XmlRoot>(&mut self) -> Result<T> {
        let start = loop {
            match self.next_token()? {
                Token::Start(start) => break start,
                Token::Text(text) if utils::is_whitespace(&text) => continue,
                Token::Text(_) => return Err(self.malformed("text before the root element")),
                Token::End => return Err(self.malformed("end tag before the root element")),
                Token::Eof => return Err(self.malformed("document has no root element")),
            }
        };
        if start.namespace() != Some(self.options.namespace()) || start.local_name() != T::ELEMENT_NAME
        {
            return Err(self.malformed(format!(
                "expected root element {{{}}}{}, found {}",
                self.options.namespace(),
                T::ELEMENT_NAME,
                start
            )));
        }

        self.path.push(start.local_name().to_string());
        self.check_depth()?;
        let value = T::read_element(self, &start)?;

        loop {
            match self.next_token()? {
                Token::Eof => return Ok(value),
                Token::Text(text) if utils::is_whitespace(&text) => continue,
                _ => return Err(self.malformed("content after the root element")),
            }
        }
    }

    /// Enters the next child element of the current element.
    ///
    /// Returns `None`, without consuming it, when the current element's end
    /// tag is next. Whitespace between children is ignored; other stray text
    /// is ignored unless the reader is strict.
    pub fn next_child(&mut self) -> Result<Option<ElementStart>> {
        loop {
            match self.next_token()? {
                Token::Start(start) => {
                    self.path.push(start.local_name().to_string());
                    self.check_depth()?;
                    return Ok(Some(start));
                }
                Token::End => {
                    self.pending.push_front(Token::End);
                    return Ok(None);
                }
                Token::Text(text) if utils::is_whitespace(&text) => continue,
                Token::Text(text) => {
                    if self.options.strict() {
                        return Err(self.malformed(format!("unexpected text {text:?}")));
                    }
                    debug!(path = %self.path(), "ignoring stray text between elements");
                }
                Token::Eof => return Err(self.malformed("unexpected end of document")),
            }
        }
    }

    /// Decoding recurses once per entered element, so nesting is bounded.
    fn check_depth(&self) -> Result<()> {
        let limit = self.options.max_depth();
        if self.path.len() > limit {
            return Err(self.malformed(format!("element nesting exceeds {limit} levels")));
        }
        Ok(())
    }

    /// Consumes the end tag of the current element and leaves it.
    pub fn close_element(&mut self) -> Result<()> {
        loop {
            match self.next_token()? {
                Token::End => {
                    self.path.pop();
                    return Ok(());
                }
                Token::Text(text) if utils::is_whitespace(&text) => continue,
                Token::Text(text) => {
                    return Err(self.malformed(format!("unexpected text {text:?} before end tag")));
                }
                Token::Start(start) => {
                    return Err(self.malformed(format!("unexpected element {start} before end tag")));
                }
                Token::Eof => return Err(self.malformed("unexpected end of document")),
            }
        }
    }

    /// Reads the text content of the current element and leaves it.
    ///
    /// Text is returned verbatim (not trimmed), with entity and character
    /// references resolved.
    pub fn read_text(&mut self) -> Result<String> {
        let mut text = String::new();
        loop {
            match self.next_token()? {
                Token::Text(chunk) => text.push_str(&chunk),
                Token::End => {
                    self.path.pop();
                    return Ok(text);
                }
                Token::Start(start) => {
                    return Err(self.malformed(format!("expected text, found element {start}")));
                }
                Token::Eof => return Err(self.malformed("unexpected end of document")),
            }
        }
    }

    /// Skips the rest of the current element, including all descendants.
    pub fn skip_element(&mut self) -> Result<()> {
        let mut depth = 0usize;
        loop {
            match self.next_token()? {
                Token::Start(_) => depth += 1,
                Token::End if depth == 0 => {
                    self.path.pop();
                    return Ok(());
                }
                Token::End => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => return Err(self.malformed("unexpected end of document")),
            }
        }
    }

    /// Handles a child the current type does not declare: an error in strict
    /// mode, otherwise skipped.
    pub fn skip_unknown(&mut self, child: &ElementStart) -> Result<()> {
        if self.options.strict() {
            let parent = &self.path[..self.path.len().saturating_sub(1)];
            return Err(CodecError::UnknownElement {
                path: parent.join("/"),
                name: child.to_string(),
            });
        }
        debug!(path = %self.path(), element = %child, "skipping unknown element");
        self.skip_element()
    }

    /// Consumes the rest of the current element and returns it for later
    /// parsing with [`reenter`](Self::reenter).
    pub fn capture_element(&mut self, start: &ElementStart) -> Result<CapturedElement> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;
        loop {
            let token = self.next_token()?;
            match &token {
                Token::Start(_) => depth += 1,
                Token::End if depth == 0 => {
                    tokens.push(token);
                    self.path.pop();
                    return Ok(CapturedElement {
                        start: start.clone(),
                        tokens,
                    });
                }
                Token::End => depth -= 1,
                Token::Text(_) => {}
                Token::Eof => return Err(self.malformed("unexpected end of document")),
            }
            tokens.push(token);
        }
    }

    /// Re-enters a captured element, as if [`next_child`](Self::next_child)
    /// had just returned it.
    pub fn reenter(&mut self, captured: CapturedElement) -> ElementStart {
        self.path.push(captured.start.local_name().to_string());
        for token in captured.tokens.into_iter().rev() {
            self.pending.push_front(token);
        }
        captured.start
    }

    pub fn mark(&self) -> ReaderMark {
        ReaderMark {
            pending: self.pending.len(),
            depth: self.path.len(),
        }
    }

    /// Drops whatever a failed parse of a re-entered element left behind.
    pub fn restore(&mut self, mark: ReaderMark) {
        while self.pending.len() > mark.pending {
            self.pending.pop_front();
        }
        self.path.truncate(mark.depth);
    }

    fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.pending.pop_front() {
            return Ok(token);
        }

        loop {
            self.buf.clear();
            let (resolved, event) = match self.reader.read_resolved_event_into(&mut self.buf) {
                Ok(pair) => pair,
                Err(err) => return Err(malformed_at(&self.path, err.to_string())),
            };
            let token = match event {
                Event::Start(start) => {
                    let local_name = utf8(start.local_name().as_ref(), &self.path)?;
                    Token::Start(resolve_start(resolved, local_name, &self.path)?)
                }
                Event::Empty(start) => {
                    let local_name = utf8(start.local_name().as_ref(), &self.path)?;
                    self.pending.push_back(Token::End);
                    Token::Start(resolve_start(resolved, local_name, &self.path)?)
                }
                Event::End(_) => Token::End,
                Event::Text(text) => {
                    let raw = utf8(&text, &self.path)?;
                    let unescaped = quick_xml::escape::unescape(&raw)
                        .map_err(|err| malformed_at(&self.path, err.to_string()))?;
                    Token::Text(unescaped.into_owned())
                }
                Event::CData(data) => Token::Text(utf8(&data, &self.path)?),
                Event::GeneralRef(reference) => {
                    let name = utf8(&reference, &self.path)?;
                    let text = utils::resolve_reference(&name)
                        .map_err(|message| malformed_at(&self.path, message))?;
                    Token::Text(text)
                }
                Event::Eof => Token::Eof,
                _ => continue,
            };
            return Ok(token);
        }
    }
}

impl<'a> XmlReader<&'a [u8]> {
    pub fn from_xml(xml: &'a str, options: XmlOptions) -> Self {
        Self::new(xml.as_bytes(), options)
    }
}

fn malformed_at(path: &[String], message: impl Into<String>) -> CodecError {
    CodecError::MalformedInput {
        path: path.join("/"),
        message: message.into(),
    }
}

fn utf8(bytes: &[u8], path: &[String]) -> Result<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|err| malformed_at(path, format!("invalid UTF-8: {err}")))
}

fn resolve_start(resolved: ResolveResult<'_>, local_name: String, path: &[String]) -> Result<ElementStart> {
    let namespace = match resolved {
        ResolveResult::Bound(Namespace(uri)) => Some(utf8(uri, path)?),
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(malformed_at(
                path,
                format!(
                    "element <{}> uses undeclared namespace prefix {}",
                    local_name,
                    String::from_utf8_lossy(&prefix)
                ),
            ));
        }
    };
    Ok(ElementStart {
        namespace,
        local_name,
    })
}
