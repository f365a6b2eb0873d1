//! DOM traversal helpers

use markup5ever_rcdom as rcdom;
use rcdom::{Handle, NodeData};

/// True when the class attribute lists `class_name` as one of its tokens
pub fn has_class(attrs: &[html5ever::Attribute], class_name: &str) -> bool {
    attrs.iter().any(|attr| {
        attr.name.local.as_ref() == "class"
            && attr
                .value
                .as_ref()
                .split_whitespace()
                .any(|token| token == class_name)
    })
}

pub fn has_attr(attrs: &[html5ever::Attribute], attr_name: &str, attr_value: &str) -> bool {
    attrs
        .iter()
        .any(|attr| attr.name.local.as_ref() == attr_name && attr.value.as_ref() == attr_value)
}

pub fn get_attr_value(attrs: &[html5ever::Attribute], attr_name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|attr| attr.name.local.as_ref() == attr_name)
        .map(|attr| attr.value.as_ref().to_string())
}

pub fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

pub fn get_text_content(handle: &Handle) -> String {
    let mut text = String::new();

    fn collect_text(node: &Handle, text: &mut String) {
        match &node.data {
            NodeData::Text { ref contents } => {
                text.push_str(&contents.borrow());
            }
            _ => {
                for child in node.children.borrow().iter() {
                    collect_text(child, text);
                }
            }
        }
    }

    collect_text(handle, &mut text);
    text.trim().to_string()
}

/// Depth-first search for the first element whose `id` attribute matches
pub fn find_element_by_id(handle: &Handle, id: &str) -> Option<Handle> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        if has_attr(&attrs.borrow(), "id", id) {
            return Some(handle.clone());
        }
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_element_by_id(child, id) {
            return Some(found);
        }
    }
    None
}

/// Depth-first search for every element carrying `class_name`, in document order
pub fn find_elements_by_class(handle: &Handle, class_name: &str) -> Vec<Handle> {
    let mut found = Vec::new();

    fn search(node: &Handle, class_name: &str, found: &mut Vec<Handle>) {
        if let NodeData::Element { ref attrs, .. } = node.data {
            if has_class(&attrs.borrow(), class_name) {
                found.push(node.clone());
            }
        }
        for child in node.children.borrow().iter() {
            search(child, class_name, found);
        }
    }

    search(handle, class_name, &mut found);
    found
}

/// Direct children that are elements, skipping text and comments
pub fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}
