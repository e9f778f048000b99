mod directory;
mod image;
mod resource_types;

pub use directory::ResourceDirectory;
pub use image::{
    IMAGE_RESOURCE_DATA_IS_DIRECTORY, IMAGE_RESOURCE_NAME_IS_STRING, ImageResourceDataEntry,
    ImageResourceDirectory, ImageResourceDirectoryEntry,
};
pub use resource_types::ResourceType;
