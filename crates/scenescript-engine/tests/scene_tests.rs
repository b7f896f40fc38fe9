//! Scene resolution and mutation tests
//!
//! Covers the object resolution precedence (library cache, bundled
//! resources, importer), cache population, and the synchronous scene
//! operations the sequencer drives.

use scenescript_engine::{
    CreateOutcome, DirectoryImporter, ImportLibrary, ModelImporter, MotionPath, NullImporter,
    ObjectTemplate, OpOutcome, Scene, SceneOps, TemplateSource,
};

/// Importer that counts requests and serves from a fixed set of types
struct CountingImporter {
    available: Vec<String>,
    requests: usize,
}

impl CountingImporter {
    fn serving(types: &[&str]) -> Self {
        Self {
            available: types.iter().map(|t| t.to_string()).collect(),
            requests: 0,
        }
    }
}

impl ModelImporter for CountingImporter {
    fn import_model(&mut self, type_name: &str) -> Option<ObjectTemplate> {
        self.requests += 1;
        if self.available.iter().any(|t| t == type_name) {
            Some(ObjectTemplate::imported(
                type_name,
                format!("/imports/{}.obj", type_name),
            ))
        } else {
            None
        }
    }
}

/// Create an object named `name` of type `type_name`, panicking on cancel
fn create(scene: &mut Scene<impl ModelImporter>, type_name: &str, name: &str) {
    match scene.resolve_or_import(type_name) {
        CreateOutcome::Resolved(handle) => scene.apply_transform(handle, name, 0.0, 0.0, 0.0),
        CreateOutcome::ImportCancelled => panic!("unexpected cancel for {}", type_name),
    }
}

#[test]
fn test_bundled_resource_resolves_and_populates_the_cache() {
    // GIVEN a scene with a bundled "box" template and an empty library
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("box");

    // WHEN resolving "box"
    create(&mut scene, "box", "box1");

    // THEN the object is live and the library was populated
    assert_eq!(scene.object_count(), 1);
    assert!(scene.library().contains("box"));
    assert_eq!(
        scene.library().get("box").map(|t| &t.source),
        Some(&TemplateSource::Bundled)
    );
}

#[test]
fn test_cache_hit_skips_the_importer() {
    // GIVEN a library already holding "pump" and an importer that counts
    let mut library = ImportLibrary::new();
    library.insert_if_absent(ObjectTemplate::imported("pump", "/imports/pump.obj"));
    let mut scene = Scene::new(library, CountingImporter::serving(&["pump"]));

    // WHEN creating two pumps
    create(&mut scene, "pump", "pump1");
    create(&mut scene, "pump", "pump2");

    // THEN the importer was never consulted
    assert_eq!(scene.object_count(), 2);
    assert_eq!(scene.importer().requests, 0);
}

#[test]
fn test_import_success_caches_for_subsequent_creations() {
    // GIVEN nothing cached and nothing bundled
    let mut scene = Scene::new(ImportLibrary::new(), CountingImporter::serving(&["crane"]));

    // WHEN creating the same type twice
    create(&mut scene, "crane", "crane1");
    create(&mut scene, "crane", "crane2");

    // THEN only the first creation went through the importer
    assert_eq!(scene.importer().requests, 1);
    assert!(scene.library().contains("crane"));
}

#[test]
fn test_unresolvable_type_reports_import_cancelled() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);

    assert_eq!(
        scene.resolve_or_import("unknown"),
        CreateOutcome::ImportCancelled
    );
    assert_eq!(scene.object_count(), 0);
    assert!(scene.library().is_empty());
}

#[test]
fn test_apply_transform_assigns_name_and_position() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("box");

    let handle = match scene.resolve_or_import("box") {
        CreateOutcome::Resolved(h) => h,
        CreateOutcome::ImportCancelled => panic!("bundled type should resolve"),
    };
    scene.apply_transform(handle, "box1", 1.0, 2.0, 3.0);

    let object = scene.object("box1").expect("object should be findable");
    assert_eq!(object.type_name, "box");
    assert_eq!(object.position, [1.0, 2.0, 3.0]);
}

#[test]
fn test_destroy_removes_the_object() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("box");
    create(&mut scene, "box", "box1");

    assert_eq!(scene.destroy("box1"), OpOutcome::Done);
    assert_eq!(scene.object_count(), 0);
    assert!(scene.object("box1").is_none());

    // Destroying again misses
    assert_eq!(scene.destroy("box1"), OpOutcome::NotFound);
}

#[test]
fn test_set_cell_stores_opaque_formula() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("boiler");
    create(&mut scene, "boiler", "boiler1");

    assert_eq!(
        scene.set_cell("boiler1", "pressure", "=level*0.4"),
        OpOutcome::Done
    );
    assert_eq!(
        scene.object("boiler1").unwrap().cells.get("pressure"),
        Some(&"=level*0.4".to_string())
    );

    assert_eq!(scene.set_cell("ghost", "x", "1"), OpOutcome::NotFound);
}

#[test]
fn test_begin_move_requires_object_and_path() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("truck");
    create(&mut scene, "truck", "truck1");

    // Path missing
    assert_eq!(
        scene.begin_move("truck1", "route9", 5.0, None),
        OpOutcome::NotFound
    );
    assert!(scene.motions().is_empty());

    // Path registered: the move is recorded with resolved references
    scene.register_path(MotionPath {
        name: "route9".to_string(),
        waypoints: vec![[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]],
    });
    assert_eq!(
        scene.begin_move("truck1", "route9", 5.0, Some(0.25)),
        OpOutcome::Done
    );
    assert_eq!(scene.motions().len(), 1);
    assert_eq!(scene.motions()[0].start_position, Some(0.25));

    // Object missing
    assert_eq!(
        scene.begin_move("ghost", "route9", 5.0, None),
        OpOutcome::NotFound
    );
}

#[test]
fn test_begin_cell_update_records_animation() {
    let mut scene = Scene::new(ImportLibrary::new(), NullImporter);
    scene.register_bundled("tank");
    create(&mut scene, "tank", "tank1");

    assert_eq!(
        scene.begin_cell_update("tank1", "level", 10.0, 0.0, 100.0, Some("liters")),
        OpOutcome::Done
    );
    assert_eq!(scene.animations().len(), 1);
    assert_eq!(scene.animations()[0].unit.as_deref(), Some("liters"));

    assert_eq!(
        scene.begin_cell_update("ghost", "level", 1.0, 0.0, 1.0, None),
        OpOutcome::NotFound
    );
}

#[test]
fn test_directory_importer_resolves_present_files_only() {
    // GIVEN an import directory containing box.obj
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("box.obj"), "o box\nv 0 0 0\n").expect("write model");

    let mut importer = DirectoryImporter::new(dir.path());

    // THEN a present file imports and an absent one cancels
    let template = importer.import_model("box").expect("box.obj exists");
    assert!(matches!(template.source, TemplateSource::Imported { .. }));
    assert!(importer.import_model("crane").is_none());
}
