//! Subnet hierarchy maintenance.
//!
//! Every node sits directly under the tightest enclosing block in the tree.
//! Inserting a block walks down through the blocks that contain it, and
//! adopts any existing siblings that it contains itself. For example with:
//!
//! ```text
//! 10.10.0.0/20
//!   10.10.0.0/22
//!     10.10.0.0/24
//! ```
//!
//! adding `10.10.0.0/21` gives:
//!
//! ```text
//! 10.10.0.0/20
//!   10.10.0.0/21
//!     10.10.0.0/22
//!       10.10.0.0/24
//! ```

use crate::error::{IpamError, Result};
use crate::models::{is_subnet_of, is_supernet_of, Cidr, SubnetMeta, SubnetNode, Subnets};

/// Options for [`delete`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteOptions {
    /// Remove the node together with everything nested under it.
    pub recursive: bool,
}

/// Insert `new` at the right depth of `subnets`.
///
/// Fails with [`IpamError::AlreadyExists`] if the block is already present.
/// Nothing is modified on failure.
pub fn insert(subnets: &mut Subnets, new: Cidr, meta: SubnetMeta) -> Result<()> {
    if subnets.contains_key(&new) {
        return Err(IpamError::AlreadyExists(new.to_string()));
    }

    let parent = subnets
        .keys()
        .find(|existing| is_subnet_of(existing, &new))
        .copied();
    if let Some(parent) = parent {
        if let Some(node) = subnets.get_mut(&parent) {
            if node.subnets.is_empty() {
                log::debug!("insert {new} as first subnet of {parent}");
                node.subnets.insert(new, meta.into_node());
                return Ok(());
            }
            log::trace!("insert {new}: descending into {parent}");
            return insert(&mut node.subnets, new, meta);
        }
    }

    let node = adopt_contained(subnets, &new, meta.into_node());
    log::debug!(
        "insert {new} at current level, adopted {} existing subnet(s)",
        node.subnets.len()
    );
    subnets.insert(new, node);
    Ok(())
}

/// Move every sibling that `new` contains under `node`.
fn adopt_contained(subnets: &mut Subnets, new: &Cidr, mut node: SubnetNode) -> SubnetNode {
    let contained: Vec<Cidr> = subnets
        .keys()
        .filter(|existing| *existing != new && is_supernet_of(new, existing))
        .copied()
        .collect();
    for cidr in contained {
        if let Some(child) = subnets.remove(&cidr) {
            log::trace!("re-parent {cidr} under {new}");
            node.subnets.insert(cidr, child);
        }
    }
    node
}

/// Remove `target` from anywhere in `subnets`, returning the removed node.
///
/// A node with subnets is only removed when `options.recursive` is set,
/// otherwise [`IpamError::HasChildren`] is returned and nothing changes.
/// A target that is not in the tree gives [`IpamError::NotFound`].
pub fn delete(subnets: &mut Subnets, target: &Cidr, options: DeleteOptions) -> Result<SubnetNode> {
    remove_node(subnets, target, options)?.ok_or_else(|| IpamError::NotFound(target.to_string()))
}

fn remove_node(
    subnets: &mut Subnets,
    target: &Cidr,
    options: DeleteOptions,
) -> Result<Option<SubnetNode>> {
    if let Some(node) = subnets.get(target) {
        if !node.subnets.is_empty() && !options.recursive {
            return Err(IpamError::HasChildren(target.to_string()));
        }
        log::debug!(
            "delete {target} and {} nested subnet(s)",
            node.count()
        );
        return Ok(subnets.remove(target));
    }
    for node in subnets.values_mut() {
        if let Some(removed) = remove_node(&mut node.subnets, target, options)? {
            return Ok(Some(removed));
        }
    }
    Ok(None)
}
