//! Even distribution of content blocks across section images.
//!
//! Every section page pairs N images with M paragraphs. The pairing is purely
//! positional: image `i` receives the `i`-th contiguous slice of
//! `ceil(M / N)` blocks, so all text is shown however many images exist. The
//! original site repeated this loop on every page; here it is the one shared
//! implementation.

use crate::model::section::ContentBlock;

/// One renderable pairing of an image with a contiguous run of content
/// blocks. Distinct from the source `Section` entity.
#[derive(Debug, PartialEq)]
pub struct DisplaySection<'a, I> {
    pub image: Option<&'a I>,
    pub contents: &'a [ContentBlock],
}

/// Splits `contents` across `images` into display sections.
///
/// - With images, produces exactly `images.len()` sections; trailing sections
///   may receive fewer (even zero) blocks when the counts do not divide
///   evenly.
/// - Without images, produces exactly one image-less section carrying every
///   block, so text is never dropped.
pub fn distribute<'a, I>(
    images: &'a [I],
    contents: &'a [ContentBlock],
) -> Vec<DisplaySection<'a, I>> {
    if images.is_empty() {
        return vec![DisplaySection { image: None, contents }];
    }

    let per_image = contents.len().div_ceil(images.len());
    images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let start = (i * per_image).min(contents.len());
            let end = ((i + 1) * per_image).min(contents.len());
            DisplaySection {
                image: Some(image),
                contents: &contents[start..end],
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(n: usize) -> Vec<ContentBlock> {
        (0..n)
            .map(|i| ContentBlock {
                content_tr: format!("tr-{i}"),
                content_en: format!("en-{i}"),
            })
            .collect()
    }

    // the image type is irrelevant to the split, unit markers are enough
    fn images(n: usize) -> Vec<()> {
        vec![(); n]
    }

    #[test]
    fn five_contents_over_two_images() {
        let contents = blocks(5);
        let imgs = images(2);

        let sections = distribute(&imgs, &contents);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].contents, &contents[0..3]);
        assert_eq!(sections[1].contents, &contents[3..5]);
        assert!(sections.iter().all(|s| s.image.is_some()));
    }

    #[test]
    fn no_images_yields_one_section_with_everything() {
        let contents = blocks(2);
        let sections = distribute::<()>(&[], &contents);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].image, None);
        assert_eq!(sections[0].contents, contents.as_slice());
    }

    #[test]
    fn no_contents_yields_image_only_sections() {
        let imgs = images(3);
        let sections = distribute(&imgs, &[]);

        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.contents.is_empty()));
        assert!(sections.iter().all(|s| s.image.is_some()));
    }

    #[test]
    fn more_images_than_contents_leaves_trailing_sections_empty() {
        let contents = blocks(2);
        let imgs = images(4);

        let sections = distribute(&imgs, &contents);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].contents, &contents[0..1]);
        assert_eq!(sections[1].contents, &contents[1..2]);
        assert!(sections[2].contents.is_empty());
        assert!(sections[3].contents.is_empty());
    }

    #[test]
    fn concatenation_preserves_the_original_sequence() {
        for (n_contents, n_images) in
            [(0, 1), (1, 1), (5, 2), (6, 2), (7, 3), (9, 4), (3, 7), (12, 5)]
        {
            let contents = blocks(n_contents);
            let imgs = images(n_images);

            let sections = distribute(&imgs, &contents);
            assert_eq!(sections.len(), n_images);

            let rejoined: Vec<&ContentBlock> =
                sections.iter().flat_map(|s| s.contents.iter()).collect();
            let original: Vec<&ContentBlock> = contents.iter().collect();
            assert_eq!(rejoined, original, "{n_contents} contents / {n_images} images");
        }
    }
}
