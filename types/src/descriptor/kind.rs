/// Shape of a [`TypeDescriptor`](super::TypeDescriptor), without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DescriptorKind {
    /// Plain nominal type
    Nominal,

    /// Generic instantiation
    Parameterized,

    /// Bounded unknown type
    Wildcard,

    /// Generic array of a structural component
    ArrayOf,

    /// Conjunction of member types
    Intersection,
}

impl DescriptorKind {
    pub fn name(self) -> &'static str {
        match self {
            DescriptorKind::Nominal => "nominal",
            DescriptorKind::Parameterized => "parameterized",
            DescriptorKind::Wildcard => "wildcard",
            DescriptorKind::ArrayOf => "array",
            DescriptorKind::Intersection => "intersection",
        }
    }
}
