#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// A set of collision families, one bit per family.
///
/// A collision model belongs to the families set in its `family` group and only collides
/// with models whose family intersects its `mask`.
pub struct Group(u32);

bitflags::bitflags! {
    impl Group: u32 {
        /// The collision family 1.
        const GROUP_1 = 1 << 0;
        /// The collision family 2.
        const GROUP_2 = 1 << 1;
        /// The collision family 3.
        const GROUP_3 = 1 << 2;
        /// The collision family 4.
        const GROUP_4 = 1 << 3;
        /// The collision family 5.
        const GROUP_5 = 1 << 4;
        /// The collision family 6.
        const GROUP_6 = 1 << 5;
        /// The collision family 7.
        const GROUP_7 = 1 << 6;
        /// The collision family 8.
        const GROUP_8 = 1 << 7;
        /// The collision family 9.
        const GROUP_9 = 1 << 8;
        /// The collision family 10.
        const GROUP_10 = 1 << 9;
        /// The collision family 11.
        const GROUP_11 = 1 << 10;
        /// The collision family 12.
        const GROUP_12 = 1 << 11;
        /// The collision family 13.
        const GROUP_13 = 1 << 12;
        /// The collision family 14.
        const GROUP_14 = 1 << 13;
        /// The collision family 15.
        const GROUP_15 = 1 << 14;
        /// The collision family 16.
        const GROUP_16 = 1 << 15;
        /// The collision family 17.
        const GROUP_17 = 1 << 16;
        /// The collision family 18.
        const GROUP_18 = 1 << 17;
        /// The collision family 19.
        const GROUP_19 = 1 << 18;
        /// The collision family 20.
        const GROUP_20 = 1 << 19;
        /// The collision family 21.
        const GROUP_21 = 1 << 20;
        /// The collision family 22.
        const GROUP_22 = 1 << 21;
        /// The collision family 23.
        const GROUP_23 = 1 << 22;
        /// The collision family 24.
        const GROUP_24 = 1 << 23;
        /// The collision family 25.
        const GROUP_25 = 1 << 24;
        /// The collision family 26.
        const GROUP_26 = 1 << 25;
        /// The collision family 27.
        const GROUP_27 = 1 << 26;
        /// The collision family 28.
        const GROUP_28 = 1 << 27;
        /// The collision family 29.
        const GROUP_29 = 1 << 28;
        /// The collision family 30.
        const GROUP_30 = 1 << 29;
        /// The collision family 31.
        const GROUP_31 = 1 << 30;
        /// The collision family 32.
        const GROUP_32 = 1 << 31;

        /// All of the families.
        const ALL = u32::MAX;
        /// None of the families.
        const NONE = 0;
    }
}

impl Default for Group {
    fn default() -> Self {
        Group::ALL
    }
}

impl Group {
    /// Can a model with the family `family1` and mask `mask1` collide with a model
    /// with the family `family2` and mask `mask2`?
    ///
    /// This is the case iff each family intersects the mask of the other model.
    #[inline]
    pub fn test(family1: Group, mask1: Group, family2: Group, mask2: Group) -> bool {
        family1.intersects(mask2) && family2.intersects(mask1)
    }
}
