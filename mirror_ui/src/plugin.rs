use bevy_app::{App, Last, Plugin, Update};
use bevy_diagnostic::{Diagnostic, DiagnosticPath, Diagnostics, RegisterDiagnostic};
use bevy_ecs::{prelude::*, schedule::SystemSet};
use bevy_log::{debug, info, warn};
use bevy_math::Rect;

use crate::{
    geometry::Border,
    mesh::default_mesh,
    mirror::{
        effect::{ImageGraphic, ImageType, MirrorEffect, SlicedFallback, SpriteInfo},
        MirrorDirection, MirrorType,
    },
    UiVertex,
};

// --- System Sets ---
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MirrorSet {
    /// Apply `SetNativeSize` requests to image rects.
    NativeSize,
    /// Regenerate mirrored meshes for changed images.
    Rebuild,
}

// --- Components / Events / Resources ---

/// Final vertex list for an image, mirrored when an effect applies.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct UiMesh {
    pub vertices: Vec<UiVertex>,
}

/// Resize an image so every mirrored copy shows the whole sprite.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetNativeSize {
    pub entity: Entity,
}

/// Counters for the current frame, flushed into diagnostics in `Last`.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MirrorFrameStats {
    pub rebuilt_meshes: u32,
    pub output_vertices: usize,
    pub skipped: u32,
}

impl MirrorFrameStats {
    pub fn reset_frame_counters(&mut self) {
        *self = Self::default();
    }
}

// --- Plugin ---

/// Mirrors image geometry for every entity carrying both an
/// [`ImageGraphic`] and a [`MirrorEffect`].
pub struct MirrorEffectPlugin;

impl MirrorEffectPlugin {
    /// Meshes rebuilt this frame.
    pub const REBUILT_MESHES: DiagnosticPath = DiagnosticPath::const_new("mirror_ui/rebuilt_meshes");
    /// Vertices written into rebuilt meshes this frame.
    pub const OUTPUT_VERTICES: DiagnosticPath = DiagnosticPath::const_new("mirror_ui/output_vertices");
    /// Rebuilds that left the default mesh unmirrored.
    pub const SKIPPED: DiagnosticPath = DiagnosticPath::const_new("mirror_ui/skipped");
}

impl Plugin for MirrorEffectPlugin {
    fn build(&self, app: &mut App) {
        info!("Building MirrorEffectPlugin...");

        app.register_type::<ImageGraphic>()
            .register_type::<MirrorEffect>()
            .register_type::<SpriteInfo>()
            .register_type::<Border>()
            .register_type::<ImageType>()
            .register_type::<MirrorType>()
            .register_type::<MirrorDirection>()
            .register_type::<SlicedFallback>();

        app.add_event::<SetNativeSize>()
            .init_resource::<MirrorFrameStats>();

        app.register_diagnostic(Diagnostic::new(Self::REBUILT_MESHES).with_suffix(" meshes"))
            .register_diagnostic(Diagnostic::new(Self::OUTPUT_VERTICES).with_suffix(" vertices"))
            .register_diagnostic(Diagnostic::new(Self::SKIPPED).with_suffix(" meshes"));

        app.configure_sets(Update, (MirrorSet::NativeSize, MirrorSet::Rebuild).chain());
        app.add_systems(
            Update,
            (
                native_size_system.in_set(MirrorSet::NativeSize),
                rebuild_mirrored_mesh_system.in_set(MirrorSet::Rebuild),
            ),
        );
        app.add_systems(Last, update_mirror_diagnostics_system);

        info!("MirrorEffectPlugin built.");
    }
}

/// Change an effect's mirror type through ECS change detection.
///
/// `MirrorEffect::set_mirror_type` on a `Mut` would flag the component as
/// changed even when the value stays the same. This only takes the mutable
/// path on a real change, so the mesh is rebuilt exactly when needed.
pub fn change_mirror_type(effect: &mut Mut<MirrorEffect>, mirror_type: MirrorType) -> bool {
    if effect.mirror_type == mirror_type {
        return false;
    }
    effect.set_mirror_type(mirror_type)
}

// --- Systems ---

/// Resize requested images around their center to the effect's native size.
fn native_size_system(
    mut requests: EventReader<SetNativeSize>,
    mut query: Query<(&mut ImageGraphic, &MirrorEffect)>,
) {
    for request in requests.read() {
        let Ok((mut graphic, effect)) = query.get_mut(request.entity) else {
            warn!("[MirrorNativeSize] Entity {:?} has no ImageGraphic + MirrorEffect", request.entity);
            continue;
        };

        let Some(sprite) = graphic.sprite else {
            warn!("[MirrorNativeSize] Entity {:?} has no sprite to size from", request.entity);
            continue;
        };

        let size = effect.native_size(&sprite);
        let rect = Rect::from_center_size(graphic.rect.center(), size);
        debug!("[MirrorNativeSize] {:?}: {:?} -> {:?}", request.entity, graphic.rect.size(), size);
        graphic.rect = rect;
    }
}

/// Rebuild the mesh of every image whose graphic or effect changed.
///
/// The mesh always starts from the default geometry, so a rebuild never
/// mirrors already mirrored vertices.
fn rebuild_mirrored_mesh_system(
    mut commands: Commands,
    mut stats: ResMut<MirrorFrameStats>,
    mut query: Query<
        (Entity, &ImageGraphic, &MirrorEffect, Option<&mut UiMesh>),
        Or<(Changed<ImageGraphic>, Changed<MirrorEffect>)>,
    >,
) {
    for (entity, graphic, effect, mesh) in query.iter_mut() {
        let mut vertices = default_mesh(graphic);
        let outcome = effect.modify_vertices(&mut vertices, graphic);

        stats.rebuilt_meshes += 1;
        stats.output_vertices += vertices.len();
        if outcome.is_skipped() {
            stats.skipped += 1;
        }

        match mesh {
            Some(mut mesh) => mesh.vertices = vertices,
            None => {
                commands.entity(entity).insert(UiMesh { vertices });
            }
        }
    }
}

fn update_mirror_diagnostics_system(mut diagnostics: Diagnostics, mut stats: ResMut<MirrorFrameStats>) {
    diagnostics.add_measurement(&MirrorEffectPlugin::REBUILT_MESHES, || stats.rebuilt_meshes as f64);
    diagnostics.add_measurement(&MirrorEffectPlugin::OUTPUT_VERTICES, || stats.output_vertices as f64);
    diagnostics.add_measurement(&MirrorEffectPlugin::SKIPPED, || stats.skipped as f64);

    stats.reset_frame_counters();
}
