//! Tree view of an IPAM document.

use crate::models::{IpamDocument, Subnets};
use colored::{ColoredString, Colorize};
use itertools::Itertools;

fn paint(text: &str, color: bool, style: fn(&str) -> ColoredString) -> String {
    if color {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render `ipam` as an indented tree, one subnet per line.
///
/// ```text
/// lab (3 subnets)
/// ├── 10.10.0.0/20  test subnet  [tag_1, tag_2]  (1)
/// │   └── 10.10.0.0/24
/// └── 192.168.0.0/24
/// ```
pub fn render_tree(ipam: &IpamDocument, color: bool) -> String {
    let mut out = format!(
        "{} ({} subnets)\n",
        paint(&ipam.description, color, |s| s.bold()),
        ipam.len()
    );
    render_level(&ipam.subnets, "", color, &mut out);
    out
}

fn render_level(subnets: &Subnets, prefix: &str, color: bool, out: &mut String) {
    let last = subnets.len().saturating_sub(1);
    for (i, (cidr, node)) in subnets.iter().enumerate() {
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };

        let mut line = format!("{prefix}{branch}{}", paint(&cidr.to_string(), color, |s| s.green()));
        if !node.description.is_empty() {
            line.push_str(&format!("  {}", node.description));
        }
        if !node.tags.is_empty() {
            let tags = format!("[{}]", node.tags.iter().join(", "));
            line.push_str(&format!("  {}", paint(&tags, color, |s| s.cyan())));
        }
        if !node.subnets.is_empty() {
            line.push_str(&format!("  ({})", node.count()));
        }
        out.push_str(&line);
        out.push('\n');

        render_level(&node.subnets, &format!("{prefix}{indent}"), color, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SubnetMeta;
    use crate::processing::insert;

    #[test]
    fn test_render_tree_plain() {
        let mut ipam = IpamDocument::new("lab");
        let tags = vec!["tag_1".to_string(), "tag_2".to_string()];
        for (cidr, desc) in [
            ("10.10.0.0/20", "test subnet"),
            ("10.10.0.0/24", ""),
            ("192.168.0.0/24", ""),
        ] {
            let t = if desc.is_empty() { &[][..] } else { &tags[..] };
            insert(&mut ipam.subnets, cidr.parse().unwrap(), SubnetMeta::new(desc, t)).unwrap();
        }
        let expected = "\
lab (3 subnets)
├── 10.10.0.0/20  test subnet  [tag_1, tag_2]  (1)
│   └── 10.10.0.0/24
└── 192.168.0.0/24
";
        assert_eq!(render_tree(&ipam, false), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_tree(&IpamDocument::new("empty"), false), "empty (0 subnets)\n");
    }
}
