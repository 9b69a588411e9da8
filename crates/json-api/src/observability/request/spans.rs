//! Route templates for span and metric labels.

use uuid::Uuid;

/// Collapse identifier segments so labels stay low-cardinality.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut template = String::from("/");
    let mut previous = "";

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            template.push('/');
        }

        template.push_str(placeholder(previous, segment).unwrap_or(segment));
        previous = segment;
    }

    template
}

fn placeholder(previous: &str, segment: &str) -> Option<&'static str> {
    if Uuid::parse_str(segment).is_ok() {
        return Some("{id}");
    }

    match previous {
        "restaurants" if segment != "search" => Some("{id}"),
        "menu" => Some("{item}"),
        "verify-payment" => Some("{reference}"),
        _ => None,
    }
}
