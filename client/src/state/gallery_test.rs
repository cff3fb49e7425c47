use super::*;

#[test]
fn twelve_projects_with_sequential_ids() {
    let all = projects();
    assert_eq!(all.len(), 12);
    assert_eq!(all[0].id, "1");
    assert_eq!(all[11].title, "Project 12");
    assert!(all[0].image_url.ends_with("/image.jpg"));
    assert!(all[11].image_url.ends_with("/image-11.jpg"));
}

#[test]
fn all_categories_shows_everything() {
    let all = projects();
    assert_eq!(filter_projects(&all, GalleryCategory::All), all);
}

#[test]
fn category_filter_is_exact() {
    let all = projects();
    let kitchens = filter_projects(&all, GalleryCategory::Kitchen);
    assert_eq!(kitchens.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["1", "4", "9"]);
    let living = filter_projects(&all, GalleryCategory::LivingRoom);
    assert_eq!(living.len(), 3);
    assert!(living.iter().all(|p| p.category == "Living Room"));
}

#[test]
fn category_labels() {
    let labels: Vec<_> = GalleryCategory::ALL.iter().map(|c| c.label()).collect();
    assert_eq!(labels, vec!["All categories", "Kitchen", "Bathroom", "Bedroom", "Living Room"]);
}

// =============================================================
// Lightbox
// =============================================================

#[test]
fn lightbox_open_swap_close() {
    let mut lightbox = Lightbox::default();
    assert!(!lightbox.is_open());

    lightbox.open(placeholder_image(5), related_images());
    assert!(lightbox.is_open());
    assert_eq!(lightbox.thumbnails.len(), 3);

    lightbox.show(placeholder_image(2));
    assert_eq!(lightbox.selected, Some(placeholder_image(2)));

    lightbox.close();
    assert_eq!(lightbox, Lightbox::default());
}

#[test]
fn thumbnail_click_while_closed_is_ignored() {
    let mut lightbox = Lightbox::default();
    lightbox.show(placeholder_image(1));
    assert!(!lightbox.is_open());
}
