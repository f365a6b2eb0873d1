//! Display tree: the page shell, its containers, and serialization

use std::rc::Rc;

use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, parse_fragment, LocalName, Namespace, ParseOpts, QualName};
use markup5ever_rcdom as rcdom;
use rcdom::{Handle, RcDom, SerializableHandle};

use crate::dom::{element_children, find_element_by_id};
use crate::error::RenderError;

const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// Page used when no template is supplied
pub const DEFAULT_SHELL: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Art Gallery</title>
<link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container my-5">
<h1 class="text-center mb-4">Art Gallery</h1>
<div id="art-container" class="row"></div>
<h2 class="text-center my-4">Social Feed</h2>
<div id="social-container" class="row"></div>
</div>
</body>
</html>
"#;

/// A parsed HTML document that cards are rendered into
pub struct Page {
    dom: RcDom,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    pub fn default_shell() -> Self {
        Self::parse(DEFAULT_SHELL)
    }

    /// Resolve a container by element id
    pub fn container(&self, id: &str) -> Option<Container> {
        find_element_by_id(&self.dom.document, id).map(|handle| Container {
            id: id.to_string(),
            handle,
            _document: self.dom.document.clone(),
        })
    }

    pub fn to_html(&self) -> Result<String, RenderError> {
        let mut out = Vec::new();
        let document: SerializableHandle = self.dom.document.clone().into();
        serialize(&mut out, &document, SerializeOpts::default())?;
        Ok(String::from_utf8(out)?)
    }
}

/// Handle to a pre-existing element that accumulates cards.
///
/// Cloning yields another handle to the same element. The handle keeps the
/// whole document alive, so cards survive the `Page` being dropped.
#[derive(Clone)]
pub struct Container {
    id: String,
    handle: Handle,
    // Held only to keep the tree alive: rcdom tears down every descendant
    // when the document node drops
    _document: Handle,
}

impl Container {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Parse `markup` as a fragment in a `<div>` context and append the
    /// resulting top-level nodes, returning how many were appended
    pub fn append_markup(&self, markup: &str) -> usize {
        let context = QualName::new(
            None,
            Namespace::from(HTML_NAMESPACE),
            LocalName::from("div"),
        );
        let fragment =
            parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new()).one(markup);

        // Fragment parsing puts everything under a synthetic <html> root
        let root = match fragment.document.children.borrow().first() {
            Some(root) => root.clone(),
            None => return 0,
        };
        let nodes: Vec<Handle> = root.children.borrow_mut().drain(..).collect();

        let mut children = self.handle.children.borrow_mut();
        for node in &nodes {
            node.parent.set(Some(Rc::downgrade(&self.handle)));
            children.push(node.clone());
        }
        nodes.len()
    }

    /// Element children currently in the container, in document order
    pub fn cards(&self) -> Vec<Handle> {
        element_children(&self.handle)
    }

    pub fn card_count(&self) -> usize {
        self.cards().len()
    }
}
