// src/textures/types.rs
use bevy::prelude::*;
use rand::Rng;

use crate::physics::BodyShape;

/// Alle geladenen Texturen, nach Körperform getrennt.
#[derive(Resource, Debug, Clone, Default)]
pub struct TextureLibrary {
    pub boxes: Vec<Handle<Image>>,
    pub balls: Vec<Handle<Image>>,
    pub background: Option<Handle<Image>>,
    /// Weiße Scheibe für Kreise ohne Textur
    pub disk: Handle<Image>,
}

impl TextureLibrary {
    pub fn for_shape(&self, shape: BodyShape) -> &[Handle<Image>] {
        match shape {
            BodyShape::Box => &self.boxes,
            BodyShape::Circle => &self.balls,
        }
    }

    /// Ersatzbild, wenn für die Form keine Textur konfiguriert ist
    pub fn fallback(&self, shape: BodyShape) -> Handle<Image> {
        match shape {
            // Das Standardbild ist ein weißes Pixel
            BodyShape::Box => Handle::default(),
            BodyShape::Circle => self.disk.clone(),
        }
    }
}

/// Zustand der Graphics-Checkboxen, die das Texturieren betreffen.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureSettings {
    pub image_render: bool,
    pub random_textures: bool,
}

impl Default for TextureSettings {
    fn default() -> Self {
        Self {
            image_render: true,
            random_textures: true,
        }
    }
}

/// Welche Textur ein Körper trägt (`None` = Ersatzbild).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyTexture(pub Option<usize>);

#[derive(Component, Debug, Default)]
pub struct BackgroundSprite;

/// Wählt den Index einer Textur aus `available` Texturen.
///
/// Zufällig bei aktivierten Zufallstexturen, sonst immer die erste.
pub fn choose_texture<R: Rng + ?Sized>(available: usize, random: bool, rng: &mut R) -> Option<usize> {
    match available {
        0 => None,
        _ if random => Some(rng.gen_range(0..available)),
        _ => Some(0),
    }
}

/// Einfärbung für Körper ohne Textur.
pub fn fallback_tint(shape: BodyShape) -> Color {
    match shape {
        BodyShape::Box => Color::srgb(0.55, 0.38, 0.22),
        BodyShape::Circle => Color::srgb(0.2, 0.45, 0.8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn no_textures_means_fallback() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_texture(0, true, &mut rng), None);
        assert_eq!(choose_texture(0, false, &mut rng), None);
    }

    #[test]
    fn without_randomness_the_first_texture_is_used() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(choose_texture(5, false, &mut rng), Some(0));
        }
    }

    #[test]
    fn random_choice_stays_in_range_and_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let picks: Vec<usize> = (0..200)
            .filter_map(|_| choose_texture(3, true, &mut rng))
            .collect();
        assert_eq!(picks.len(), 200);
        assert!(picks.iter().all(|&i| i < 3));
        assert!((0..3).all(|i| picks.contains(&i)));
    }

    #[test]
    fn library_selects_list_by_shape() {
        let library = TextureLibrary {
            boxes: vec![Handle::default(), Handle::default()],
            balls: vec![Handle::default()],
            ..default()
        };
        assert_eq!(library.for_shape(BodyShape::Box).len(), 2);
        assert_eq!(library.for_shape(BodyShape::Circle).len(), 1);
    }
}
