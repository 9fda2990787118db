use std::collections::hash_map::{Entry as MapEntry, HashMap};
use std::sync::Arc;

use eframe::egui;
use profilecard_app_core::{AvatarImage, AvatarKey};

struct Entry {
    source: Arc<AvatarImage>,
    handle: egui::TextureHandle,
    uploaded_at: f64,
}

/// GPU textures for decoded avatars, one per (view, profile) slot.
#[derive(Default)]
pub struct AvatarTextures {
    entries: HashMap<AvatarKey, Entry>,
}

impl AvatarTextures {
    /// Returns the texture for `key`, uploading `image` on first use, plus
    /// the time it was uploaded.
    pub fn get_or_upload(
        &mut self,
        ctx: &egui::Context,
        key: AvatarKey,
        image: &Arc<AvatarImage>,
    ) -> (egui::TextureHandle, f64) {
        let entry = match self.entries.entry(key) {
            MapEntry::Occupied(o) if Arc::ptr_eq(&o.get().source, image) => o.into_mut(),
            MapEntry::Occupied(mut o) => {
                o.insert(upload(ctx, key, image));
                o.into_mut()
            }
            MapEntry::Vacant(v) => v.insert(upload(ctx, key, image)),
        };
        (entry.handle.clone(), entry.uploaded_at)
    }

    /// Frees textures whose slot is gone.
    pub fn retain(&mut self, mut keep: impl FnMut(&AvatarKey) -> bool) {
        self.entries.retain(|k, _| keep(k));
    }
}

fn upload(ctx: &egui::Context, key: AvatarKey, image: &Arc<AvatarImage>) -> Entry {
    let pixels = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
    let handle = ctx.load_texture(
        format!("avatar-{}-{}", key.view_id, key.profile_id),
        pixels,
        egui::TextureOptions::LINEAR,
    );
    Entry {
        source: image.clone(),
        handle,
        uploaded_at: ctx.input(|i| i.time),
    }
}
