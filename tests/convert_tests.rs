//! Converter Driver Tests
//!
//! Tests for:
//! - Document → converter-node forest conversion
//! - Scene hierarchy mirroring and transform decomposition
//! - Scene-node → converter-node registration
//! - Missing scene diagnostics

use collada_rig::converter::{Converter, ConverterContext, ConverterNode};
use collada_rig::diag::MemoryLog;
use collada_rig::scene::{SceneGraph, SceneNode};
use collada_rig::Document;
use glam::{Mat4, Vec3};
use std::rc::Rc;

// ============================================================================
// Missing Scene
// ============================================================================

#[test]
fn document_without_scene_warns_and_yields_nothing() {
    let doc = Document::default();
    let log = MemoryLog::new();
    let mut ctx = ConverterContext::new(&log);

    let roots = Converter::create_scene(&doc, &mut ctx);

    assert!(roots.is_empty());
    assert_eq!(log.warning_count(), 1);
    assert!(log.messages()[0].0.contains("no scene"));
}

#[test]
fn converter_routes_diagnostics_to_injected_sink() {
    let log = Rc::new(MemoryLog::new());
    let converter = Converter::with_log(Box::new(Rc::clone(&log)));

    let file = converter.convert(&Document::default());

    assert!(file.roots.is_empty());
    assert_eq!(log.warning_count(), 1);
    assert!(log.messages()[0].0.contains("no scene"));
}

// ============================================================================
// Hierarchy Mirroring
// ============================================================================

#[test]
fn convert_mirrors_scene_hierarchy() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut graph = SceneGraph::new();
    let mut armature = SceneNode::new();
    armature.name = Some("Armature".to_string());
    armature.local_transform = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let root = graph.add_node(armature);
    graph.add_to_parent(SceneNode::with_sid("spine"), root);

    let doc = Document { scene: Some(graph) };
    let file = Converter::new().convert(&doc);

    assert_eq!(file.roots.len(), 1);
    let root_node = &file.nodes[file.roots[0]];
    assert_eq!(root_node.name, "Armature");
    assert!((root_node.translation - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    assert_eq!(root_node.parent, None);
    assert_eq!(root_node.children.len(), 1);

    let child = &file.nodes[root_node.children[0]];
    assert_eq!(child.parent, Some(file.roots[0]));
    assert_eq!(child.name, "", "Unnamed nodes convert with an empty name");
}

#[test]
fn convert_registers_every_scene_node() {
    let mut graph = SceneGraph::new();
    let root = graph.add_node(SceneNode::new());
    let a = graph.add_to_parent(SceneNode::with_sid("a"), root);
    let b = graph.add_to_parent(SceneNode::with_sid("b"), a);
    let handles = [root, a, b];

    let doc = Document { scene: Some(graph) };
    let log = MemoryLog::new();
    let mut ctx = ConverterContext::new(&log);
    Converter::create_scene(&doc, &mut ctx);

    for handle in handles {
        assert!(
            ctx.find_converter_node(handle).is_some(),
            "Every scene node must have a converter counterpart"
        );
    }
}

#[test]
fn convert_handles_multiple_roots() {
    let mut graph = SceneGraph::new();
    graph.add_node(SceneNode::new());
    graph.add_node(SceneNode::new());

    let doc = Document { scene: Some(graph) };
    let file = Converter::new().convert(&doc);

    assert_eq!(file.roots.len(), 2);
    assert_eq!(file.nodes.len(), 2);
}

// ============================================================================
// Subtree Conversion
// ============================================================================

#[test]
fn create_node_converts_only_the_given_subtree() {
    let mut graph = SceneGraph::new();
    let root = graph.add_node(SceneNode::new());
    let inside = graph.add_to_parent(SceneNode::with_sid("inside"), root);
    let outside = graph.add_to_parent(SceneNode::with_sid("outside"), root);

    let log = MemoryLog::new();
    let mut ctx = ConverterContext::new(&log);
    ConverterNode::create_node(&graph, inside, None, &mut ctx);

    assert!(ctx.find_converter_node(inside).is_some());
    assert!(ctx.find_converter_node(outside).is_none());
    assert!(ctx.find_converter_node(root).is_none());
}
