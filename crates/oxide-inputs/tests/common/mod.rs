#![allow(dead_code)]

use std::collections::HashMap;
use std::rc::Rc;

use oxide_inputs::Behavior;
use regex::Regex;

/// Attributes of one rendered `<input>` tag.
#[derive(Debug)]
pub struct InputNode {
    attrs: HashMap<String, String>,
}

impl InputNode {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    /// Returns the attribute value, panicking when it is missing.
    pub fn expect_attr(&self, name: &str) -> &str {
        self.attr(name)
            .unwrap_or_else(|| panic!("Expected attribute {name:?} on {:?}", self.attrs))
    }
}

/// Returns all `<input>` tags in `html`, in document order.
pub fn inputs(html: &str) -> Vec<InputNode> {
    let tag = Regex::new(r"<input\s([^>]*?)/?>").unwrap();
    let attr = Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)="([^"]*)""#).unwrap();

    tag.captures_iter(html)
        .map(|caps| InputNode {
            attrs: attr
                .captures_iter(&caps[1])
                .map(|a| (a[1].to_string(), a[2].to_string()))
                .collect(),
        })
        .collect()
}

/// Returns the first `<input>` named `name`.
pub fn input_named(html: &str, name: &str) -> InputNode {
    inputs(html)
        .into_iter()
        .find(|node| node.attr("name") == Some(name))
        .unwrap_or_else(|| panic!("Expected an input named {name:?} in: {html}"))
}

/// Wraps one behavior into a behavior list.
pub fn behaviors<B: Behavior + 'static>(behavior: B) -> Vec<Rc<dyn Behavior>> {
    let behavior: Rc<dyn Behavior> = Rc::new(behavior);
    vec![behavior]
}
