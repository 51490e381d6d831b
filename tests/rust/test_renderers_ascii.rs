use super::*;
use crate::config::RenderConfig;
use crate::layout::{DynamicLayoutBuilder, IndexBase, StaticLayoutBuilder};
use crate::tree::{Aggregate, ArraySegmentTree, DynamicNode, DynamicSegmentTree};

fn static_graph(values: &[i64]) -> LayoutGraph {
    let tree = ArraySegmentTree::build(values, Aggregate::Sum, IndexBase::One).unwrap();
    StaticLayoutBuilder::new(tree.len(), tree).unwrap().into_graph()
}

fn render(graph: &LayoutGraph) -> String {
    AsciiRenderer::new(true).render(graph)
}

#[test]
fn test_box_width() {
    assert_eq!(box_width("a", 1), 5);
    assert_eq!(box_width("7 [0,1]", 0), 9);
    assert_eq!(box_width("", 2), 6);
}

#[test]
fn test_render_empty_graph() {
    assert_eq!(render(&LayoutGraph::new()), "");
}

#[test]
fn test_render_two_leaves() {
    let out = render(&static_graph(&[3, 4]));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 8);

    assert!(lines[0].contains('┌'));
    assert!(lines[1].contains("7 [0,1]"));
    assert!(lines[2].contains('┬'));

    // connector row: corners at the children, junction under the parent
    assert!(lines[3].contains('┌'));
    assert!(lines[3].contains('┐'));
    assert!(lines[3].contains('┴'));

    assert!(lines[5].starts_with('╭'));
    assert_eq!(lines[5].matches('┴').count(), 2);
    let left = lines[6].find("3 [0,0]").unwrap();
    let right = lines[6].find("4 [1,1]").unwrap();
    assert!(left < right);
}

#[test]
fn test_render_leaves_rounded_internal_square() {
    let out = render(&static_graph(&[1, 2, 3, 4]));
    let lines: Vec<&str> = out.lines().collect();
    assert!(!lines[0].contains('╭'));
    assert!(lines[0].contains('┌'));
    let leaf_top = lines[10];
    assert_eq!(leaf_top.matches('╭').count(), 4);
    assert!(!leaf_top.contains('┌'));
}

#[test]
fn test_render_all_labels_survive() {
    let values: Vec<i64> = (1..=8).collect();
    let graph = static_graph(&values);
    let out = render(&graph);
    for label in graph.nodes() {
        assert!(out.contains(&label.to_string()), "missing {label}:\n{out}");
    }
}

#[test]
fn test_render_ascii_charset() {
    let out = AsciiRenderer::new(false).render(&static_graph(&[3, 4, 5]));
    assert!(out.contains('+'));
    assert!(out.contains("12 [0,2]"));
    assert!(
        !out.chars().any(|c| ('\u{2500}'..='\u{257F}').contains(&c)),
        "box-drawing char in ascii output:\n{out}"
    );
}

#[test]
fn test_render_padding_from_config() {
    let config = RenderConfig {
        padding: 3,
        ..RenderConfig::default()
    };
    let out = AsciiRenderer::from_config(&config).render(&static_graph(&[3, 4]));
    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[1].contains("│   7 [0,1]   │"), "{out}");
}

#[test]
fn test_render_single_dynamic_root_is_leaf() {
    let root = DynamicNode::leaf(0i64);
    let graph = DynamicLayoutBuilder::new(&root, 0, 10).unwrap().into_graph();
    let out = render(&graph);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with('╭'));
    assert!(lines[1].contains("0 [0,10]"));
}

#[test]
fn test_place_boxes_rows_and_spacing() {
    let values: Vec<i64> = (1..=8).collect();
    let graph = static_graph(&values);
    let gap = 2;
    let boxes = place_boxes(&graph, 1, gap);
    assert_eq!(boxes.len(), graph.node_count());

    for (depth, level) in graph.levels() {
        let mut rects: Vec<Rect> = level.iter().map(|(label, _)| boxes[label].rect).collect();
        assert!(rects.iter().all(|r| r.y == i64::from(depth) * LEVEL_PITCH));
        assert!(rects.iter().all(|r| r.x >= 0));
        rects.sort_by_key(|r| r.x);
        for pair in rects.windows(2) {
            assert!(pair[1].x - pair[0].right() > gap, "{pair:?}");
        }
    }
}

#[test]
fn test_paint_edge_straight_down() {
    let mut canvas = Canvas::new(12, 10, CharSet::Unicode);
    let parent = PlacedBox {
        text: "p".to_string(),
        rect: Rect::new(2, 0, 5, 3),
        center: 4,
        leaf: false,
    };
    let child = PlacedBox {
        text: "c".to_string(),
        rect: Rect::new(2, 5, 5, 3),
        center: 4,
        leaf: true,
    };
    paint_node(&mut canvas, &parent);
    paint_node(&mut canvas, &child);
    paint_edge(&mut canvas, &parent, &child);
    assert_eq!(canvas.get(4, 2), '┬');
    assert_eq!(canvas.get(4, 3), '│');
    assert_eq!(canvas.get(4, 4), '│');
    assert_eq!(canvas.get(4, 5), '┴');
    assert_eq!(canvas.get(4, 6), 'c');
}

#[test]
fn test_render_sparse_tree_width_follows_node_count() {
    let mut tree = DynamicSegmentTree::new(0, 1_000_000, Aggregate::Sum).unwrap();
    tree.set(0, 1).unwrap();
    let graph = DynamicLayoutBuilder::new(tree.root(), 0, 1_000_000)
        .unwrap()
        .into_graph();
    assert_eq!(graph.node_count(), 21);

    let out = render(&graph);
    let widest = out.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let box_plus_gap = box_width("1 [0,1000000]", 1) + 3;
    assert!(
        widest as i64 <= 21 * box_plus_gap,
        "widest line {widest} columns"
    );
    for label in graph.nodes() {
        assert!(out.contains(&label.to_string()), "missing {label}");
    }
}

#[test]
fn test_render_path_at_i64_limit() {
    let (l, r) = (i64::MAX - 7, i64::MAX);
    let mut tree = DynamicSegmentTree::new(l, r, Aggregate::Sum).unwrap();
    tree.set(l + 1, 1).unwrap();
    let graph = DynamicLayoutBuilder::new(tree.root(), l, r).unwrap().into_graph();
    let out = render(&graph);
    assert_eq!(out.lines().count(), 4 * LEVEL_PITCH as usize - 2);
    assert!(out.contains(&format!("1 [{},{}]", l + 1, l + 1)));
}
