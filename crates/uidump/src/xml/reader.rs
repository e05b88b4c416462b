//! Element tree construction on top of the quick-xml event reader

use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Error, ErrorKind, Result};
use crate::xml::model::{Document, Element};

/// Element whose end tag has not been read yet
#[derive(Debug)]
struct OpenElement {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Element>,
}

impl OpenElement {
    fn finish(self) -> Element {
        Element::from_parts(self.name, self.attributes, self.children)
    }
}

/// Builds a [`Document`] from XML text.
///
/// Open elements live on an explicit stack, so nesting depth is bounded by
/// memory rather than by the call stack.
pub struct TreeBuilder<'a> {
    reader: Reader<&'a [u8]>,
    stack: Vec<OpenElement>,
    root: Option<Element>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut reader = Reader::from_str(input);
        // end tags are matched against the stack below for a precise error
        reader.config_mut().check_end_names = false;

        Self {
            reader,
            stack: Vec::new(),
            root: None,
        }
    }

    /// Consume the input and return the finished document
    pub fn build(mut self) -> Result<Document> {
        loop {
            match self.reader.read_event() {
                Ok(Event::Start(start)) => {
                    let open = open_element(&start)?;
                    self.stack.push(open);
                }
                Ok(Event::Empty(start)) => {
                    let element = open_element(&start)?.finish();
                    self.attach(element)?;
                }
                Ok(Event::End(end)) => {
                    let found = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    self.close_element(found)?;
                }
                Ok(Event::Eof) => break,
                // text, CDATA, comments, PIs, the declaration and DOCTYPE carry no attributes
                Ok(_) => {}
                Err(err) => {
                    return Err(Error::at(
                        ErrorKind::Syntax(err.to_string()),
                        self.reader.error_position(),
                    ));
                }
            }
        }

        if let Some(open) = self.stack.pop() {
            return Err(Error::new(ErrorKind::UnclosedElement { name: open.name }));
        }

        self.root
            .map(Document::new)
            .ok_or_else(|| Error::new(ErrorKind::EmptyDocument))
    }

    fn close_element(&mut self, found: String) -> Result<()> {
        let Some(open) = self.stack.pop() else {
            return Err(Error::new(ErrorKind::UnexpectedEndTag { name: found }));
        };

        if open.name != found {
            return Err(Error::new(ErrorKind::MismatchedEndTag {
                expected: open.name,
                found,
            }));
        }

        self.attach(open.finish())
    }

    fn attach(&mut self, element: Element) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(element),
            None if self.root.is_some() => return Err(Error::new(ErrorKind::MultipleRoots)),
            None => self.root = Some(element),
        }
        Ok(())
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<OpenElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let mut attributes = IndexMap::new();
    // duplicate names are rejected by the attribute iterator itself
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|err| {
            Error::new(ErrorKind::Syntax(format!(
                "invalid value for attribute '{key}': {err}"
            )))
        })?;
        attributes.insert(key, value.into_owned());
    }

    Ok(OpenElement {
        name,
        attributes,
        children: Vec::new(),
    })
}
