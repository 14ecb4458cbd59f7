//! IPAM document model.

use super::Cidr;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Child subnets keyed by CIDR, iterated in [`Cidr`] order.
pub type Subnets = BTreeMap<Cidr, SubnetNode>;

/// Treat an explicit YAML `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One CIDR block. Its CIDR is the key under which it is stored in the parent.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetNode {
    /// Free-text label.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Ordered tags.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Subnets nested directly under this block.
    #[serde(default, alias = "prefixes", deserialize_with = "null_as_default")]
    pub subnets: Subnets,
}

impl SubnetNode {
    /// Number of nodes below this one, at any depth.
    pub fn count(&self) -> usize {
        self.subnets.values().map(|child| 1 + child.count()).sum()
    }
}

/// Root of an IPAM file: a description plus the forest of top-level subnets.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct IpamDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, alias = "prefixes", deserialize_with = "null_as_default")]
    pub subnets: Subnets,
}

impl IpamDocument {
    /// Create an empty document.
    pub fn new(description: &str) -> IpamDocument {
        IpamDocument {
            description: description.to_string(),
            subnets: Subnets::new(),
        }
    }

    /// Total number of subnets in the document.
    pub fn len(&self) -> usize {
        self.subnets.values().map(|node| 1 + node.count()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subnets.is_empty()
    }

    /// Find the node for `cidr` at any depth.
    pub fn find(&self, cidr: &Cidr) -> Option<&SubnetNode> {
        fn walk<'a>(subnets: &'a Subnets, cidr: &Cidr) -> Option<&'a SubnetNode> {
            subnets
                .get(cidr)
                .or_else(|| subnets.values().find_map(|node| walk(&node.subnets, cidr)))
        }
        walk(&self.subnets, cidr)
    }

    /// Chain of ancestors of `cidr`, outermost first. `None` when `cidr` is absent.
    pub fn ancestors(&self, cidr: &Cidr) -> Option<Vec<Cidr>> {
        fn walk(subnets: &Subnets, cidr: &Cidr, path: &mut Vec<Cidr>) -> bool {
            if subnets.contains_key(cidr) {
                return true;
            }
            for (key, node) in subnets {
                path.push(*key);
                if walk(&node.subnets, cidr, path) {
                    return true;
                }
                path.pop();
            }
            false
        }
        let mut path = Vec::new();
        walk(&self.subnets, cidr, &mut path).then_some(path)
    }
}

/// Metadata supplied for a new subnet on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubnetMeta {
    pub description: String,
    pub tags: Vec<String>,
}

impl SubnetMeta {
    /// Build metadata, trimming tags and dropping empty ones.
    pub fn new(description: &str, tags: &[String]) -> SubnetMeta {
        SubnetMeta {
            description: description.to_string(),
            tags: tags
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    /// Turn the metadata into a leaf node.
    pub fn into_node(self) -> SubnetNode {
        SubnetNode {
            description: self.description,
            tags: self.tags,
            subnets: Subnets::new(),
        }
    }
}
