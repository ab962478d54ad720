//! Skeleton: the named bone collection of one animated object.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::bone::Bone;

/// Ordered bone collection with an exact-name index.
///
/// Lookup is exact string match. When two bones share a name the first one
/// added wins, matching the engine's own find-bone behavior. Serializes as a
/// plain bone list; the index is rebuilt on deserialization.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Bone>", into = "Vec<Bone>")]
pub struct Skeleton {
    bones: Vec<Bone>,
    index: HashMap<String, usize>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bones(bones: Vec<Bone>) -> Self {
        let mut skeleton = Self::new();
        for bone in bones {
            skeleton.add_bone(bone);
        }
        skeleton
    }

    /// Append a bone. A duplicate name keeps the earlier index entry.
    pub fn add_bone(&mut self, bone: Bone) {
        let slot = self.bones.len();
        self.index.entry(bone.name.clone()).or_insert(slot);
        self.bones.push(bone);
    }

    /// Find a bone by exact name.
    pub fn find_bone(&self, name: &str) -> Option<&Bone> {
        self.index.get(name).map(|&i| &self.bones[i])
    }

    /// Find a bone by exact name, mutably.
    pub fn find_bone_mut(&mut self, name: &str) -> Option<&mut Bone> {
        match self.index.get(name) {
            Some(&i) => Some(&mut self.bones[i]),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }
}

impl From<Vec<Bone>> for Skeleton {
    fn from(bones: Vec<Bone>) -> Self {
        Self::from_bones(bones)
    }
}

impl From<Skeleton> for Vec<Bone> {
    fn from(skeleton: Skeleton) -> Self {
        skeleton.bones
    }
}
