//! Design gallery projects, category filter, and lightbox.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

const IMAGE_BASE: &str = "https://flowbite.s3.amazonaws.com/docs/gallery/square";

/// Gallery category tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryCategory {
    #[default]
    All,
    Kitchen,
    Bathroom,
    Bedroom,
    LivingRoom,
}

impl GalleryCategory {
    pub const ALL: [Self; 5] = [Self::All, Self::Kitchen, Self::Bathroom, Self::Bedroom, Self::LivingRoom];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All categories",
            Self::Kitchen => "Kitchen",
            Self::Bathroom => "Bathroom",
            Self::Bedroom => "Bedroom",
            Self::LivingRoom => "Living Room",
        }
    }

    /// Whether a project tagged `category` is shown under this tab.
    #[must_use]
    pub fn matches(self, category: &str) -> bool {
        self == Self::All || self.label() == category
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub image_url: String,
}

/// Flowbite placeholder image URL; index 0 is the un-suffixed `image.jpg`.
#[must_use]
pub fn placeholder_image(index: usize) -> String {
    if index == 0 { format!("{IMAGE_BASE}/image.jpg") } else { format!("{IMAGE_BASE}/image-{index}.jpg") }
}

/// The twelve showcase projects.
#[must_use]
pub fn projects() -> Vec<GalleryProject> {
    const CATEGORIES: [GalleryCategory; 12] = [
        GalleryCategory::Kitchen,
        GalleryCategory::Bathroom,
        GalleryCategory::Bedroom,
        GalleryCategory::Kitchen,
        GalleryCategory::LivingRoom,
        GalleryCategory::Bathroom,
        GalleryCategory::Bedroom,
        GalleryCategory::LivingRoom,
        GalleryCategory::Kitchen,
        GalleryCategory::Bathroom,
        GalleryCategory::Bedroom,
        GalleryCategory::LivingRoom,
    ];
    CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, cat)| GalleryProject {
            id: (i + 1).to_string(),
            title: format!("Project {}", i + 1),
            category: cat.label().to_owned(),
            image_url: placeholder_image(i),
        })
        .collect()
}

#[must_use]
pub fn filter_projects(projects: &[GalleryProject], category: GalleryCategory) -> Vec<GalleryProject> {
    projects.iter().filter(|p| category.matches(&p.category)).cloned().collect()
}

/// Thumbnails offered beside any enlarged image.
#[must_use]
pub fn related_images() -> Vec<String> {
    (1..=3).map(placeholder_image).collect()
}

/// Enlarged-image overlay. Closed when `selected` is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    pub selected: Option<String>,
    pub thumbnails: Vec<String>,
}

impl Lightbox {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn open(&mut self, image: String, thumbnails: Vec<String>) {
        self.selected = Some(image);
        self.thumbnails = thumbnails;
    }

    /// Swap the main image for a thumbnail. Ignored while closed.
    pub fn show(&mut self, image: String) {
        if self.is_open() {
            self.selected = Some(image);
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.thumbnails.clear();
    }
}
