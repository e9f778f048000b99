use derive_more::Display;

/// The predefined `RT_*` resource type identifiers.
#[derive(Copy, Clone, Debug, Display, Eq, PartialEq)]
#[repr(u16)]
pub enum ResourceType {
    Cursor = 1,
    Bitmap = 2,
    Icon = 3,
    Menu = 4,
    Dialog = 5,
    String = 6,
    FontDirectory = 7,
    Font = 8,
    Accelerator = 9,
    RCData = 10,
    MessageTable = 11,
    GroupCursor = 12,
    GroupIcon = 14,
    Version = 16,
    DialogInclude = 17,
    PlugPlay = 19,
    Vxd = 20,
    AnimatedCursor = 21,
    AnimatedIcon = 22,
    Html = 23,
    Manifest = 24,
}

impl ResourceType {
    const ALL: [Self; 21] = [
        Self::Cursor,
        Self::Bitmap,
        Self::Icon,
        Self::Menu,
        Self::Dialog,
        Self::String,
        Self::FontDirectory,
        Self::Font,
        Self::Accelerator,
        Self::RCData,
        Self::MessageTable,
        Self::GroupCursor,
        Self::GroupIcon,
        Self::Version,
        Self::DialogInclude,
        Self::PlugPlay,
        Self::Vxd,
        Self::AnimatedCursor,
        Self::AnimatedIcon,
        Self::Html,
        Self::Manifest,
    ];

    #[inline]
    pub const fn id(self) -> u16 {
        self as u16
    }

    pub fn from_id(id: u16) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|resource_type| resource_type.id() == id)
    }
}

impl From<ResourceType> for u32 {
    #[inline]
    fn from(resource_type: ResourceType) -> Self {
        resource_type.id().into()
    }
}

#[cfg(test)]
mod tests {
    use super::ResourceType;

    #[test]
    fn from_id() {
        assert_eq!(ResourceType::from_id(16), Some(ResourceType::Version));
        assert_eq!(ResourceType::from_id(24), Some(ResourceType::Manifest));
        assert_eq!(ResourceType::from_id(13), None);
        assert_eq!(ResourceType::Version.to_string(), "Version");
    }
}
