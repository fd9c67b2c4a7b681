//! Exclusive control resources a goal may claim.

use bitflags::bitflags;

/// One exclusive capability of an agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlResource {
    Locomotion,
    Gaze,
    Jump,
    TargetAcquisition,
}

impl ControlResource {
    pub const ALL: [ControlResource; 4] = [
        ControlResource::Locomotion,
        ControlResource::Gaze,
        ControlResource::Jump,
        ControlResource::TargetAcquisition,
    ];

    /// The single-member set for this resource.
    #[inline]
    pub const fn flag(self) -> ResourceSet {
        match self {
            ControlResource::Locomotion        => ResourceSet::LOCOMOTION,
            ControlResource::Gaze              => ResourceSet::GAZE,
            ControlResource::Jump              => ResourceSet::JUMP,
            ControlResource::TargetAcquisition => ResourceSet::TARGET_ACQUISITION,
        }
    }
}

bitflags! {
    /// A set of [`ControlResource`]s.
    #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
    pub struct ResourceSet: u8 {
        const LOCOMOTION         = 1 << 0;
        const GAZE               = 1 << 1;
        const JUMP               = 1 << 2;
        const TARGET_ACQUISITION = 1 << 3;
    }
}

impl ResourceSet {
    /// Members in declaration order.
    pub fn resources(self) -> impl Iterator<Item = ControlResource> {
        ControlResource::ALL
            .into_iter()
            .filter(move |r| self.contains(r.flag()))
    }

    #[inline]
    pub fn has(self, resource: ControlResource) -> bool {
        self.contains(resource.flag())
    }
}

impl From<ControlResource> for ResourceSet {
    fn from(r: ControlResource) -> Self {
        r.flag()
    }
}

impl FromIterator<ControlResource> for ResourceSet {
    fn from_iter<I: IntoIterator<Item = ControlResource>>(iter: I) -> Self {
        iter.into_iter().fold(ResourceSet::empty(), |acc, r| acc | r.flag())
    }
}
