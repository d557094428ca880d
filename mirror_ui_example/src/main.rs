use std::path::Path;

use bevy_app::{App, PostUpdate, Startup};
use bevy_color::Color;
use bevy_ecs::prelude::*;
use bevy_log::{error, info, warn, Level, LogPlugin};
use bevy_math::{Rect, Vec2};
use bevy_utils::default;

use mirror_ui::{
    default_mesh, Border, ImageGraphic, ImageType, MirrorDefinition, MirrorEffect, MirrorEffectPlugin,
    MirrorType, SetNativeSize, SpriteInfo, UiMesh,
};

#[derive(Resource)]
struct DemoDefinition(MirrorDefinition);

#[derive(Component)]
struct FromDefinition;

fn main() {
    let mut app = App::new();
    app.add_plugins(LogPlugin {
        level: Level::DEBUG,
        filter: "bevy_app=info,bevy_ecs=info,mirror_ui=debug,mirror_demo=debug".to_string(),
        ..default()
    });

    info!("Starting mirror_ui demo...");

    let definition_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/mirror.toml");
    let definition = match MirrorDefinition::load(&definition_path) {
        Ok(definition) => definition,
        Err(e) => {
            warn!("Falling back to built-in definition: {}", e);
            MirrorDefinition::default()
        }
    };

    mirror_standalone(&definition);

    app.add_plugins(MirrorEffectPlugin)
        .insert_resource(DemoDefinition(definition))
        .add_systems(Startup, spawn_demo_images)
        .add_systems(PostUpdate, log_rebuilt_meshes);

    // First frame builds the meshes, second applies the native size request
    app.update();
    let mut from_definition = app.world_mut().query_filtered::<Entity, With<FromDefinition>>();
    let targets: Vec<Entity> = from_definition.iter(app.world()).collect();
    for entity in targets {
        app.world_mut().send_event(SetNativeSize { entity });
    }
    app.update();

    info!("mirror_ui demo finished.");
}

/// Run the transform directly on a vertex buffer, outside of any ECS world.
fn mirror_standalone(definition: &MirrorDefinition) {
    let _span = tracing::info_span!("mirror_standalone").entered();

    let (effect, graphic) = definition.clone().into_parts();
    let mut vertices = default_mesh(&graphic);
    let source = vertices.len();

    let outcome = effect.modify_vertices(&mut vertices, &graphic);
    if outcome.is_skipped() {
        error!("Standalone mirror produced no output: {:?}", outcome);
        return;
    }

    info!(
        "{:?} {:?} image: {} -> {} vertices ({:?})",
        effect.mirror_type,
        graphic.image_type,
        source,
        vertices.len(),
        outcome
    );
}

fn spawn_demo_images(mut commands: Commands, definition: Res<DemoDefinition>) {
    let (effect, graphic) = definition.0.clone().into_parts();
    commands.spawn((graphic, effect, FromDefinition));

    let frame = SpriteInfo::new(Vec2::new(48.0, 48.0)).with_border(Border::uniform(12.0));
    commands.spawn((
        ImageGraphic::new(Rect::new(0.0, 0.0, 160.0, 90.0), ImageType::Sliced)
            .with_sprite(frame)
            .with_color(Color::srgba(0.129, 0.161, 0.165, 1.0)),
        MirrorEffect::new(MirrorType::HorizontalRL),
    ));

    let tile = SpriteInfo::new(Vec2::new(16.0, 16.0));
    commands.spawn((
        ImageGraphic::new(Rect::new(0.0, 0.0, 64.0, 64.0), ImageType::Tiled).with_sprite(tile),
        MirrorEffect::new(MirrorType::QuarterRLBT),
    ));

    info!("Spawned demo images");
}

fn log_rebuilt_meshes(query: Query<(Entity, &ImageGraphic, &MirrorEffect, &UiMesh), Changed<UiMesh>>) {
    for (entity, graphic, effect, mesh) in query.iter() {
        info!(
            "[Demo] {:?}: {:?} {:?} rect {:?} -> {} vertices",
            entity,
            graphic.image_type,
            effect.mirror_type,
            graphic.rect.size(),
            mesh.vertices.len()
        );
    }
}
