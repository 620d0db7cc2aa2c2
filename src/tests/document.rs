use super::{ContentNode, NodeKind};

#[test]
fn test_node_type_mapping() {
    assert_eq!(NodeKind::from_node_type("heading-1"), NodeKind::Heading(1));
    assert_eq!(NodeKind::from_node_type("heading-6"), NodeKind::Heading(6));
    assert_eq!(NodeKind::from_node_type("heading-7"), NodeKind::Other);
    assert_eq!(NodeKind::from_node_type("paragraph"), NodeKind::Paragraph);
    assert_eq!(NodeKind::from_node_type("embedded-asset-block"), NodeKind::Other);
}

#[test]
fn test_decode_rich_text_document() {
    let json = r#"{
        "nodeType": "document",
        "data": {},
        "content": [
            {"nodeType": "heading-2", "content": [
                {"nodeType": "text", "value": "Verse ", "marks": []},
                {"nodeType": "text", "value": "one", "marks": [{"type": "bold"}]}
            ]},
            {"nodeType": "paragraph", "content": [
                {"nodeType": "text", "value": "[Am]Hello\n[C]World", "marks": []}
            ]}
        ]
    }"#;

    let doc: ContentNode = serde_json::from_str(json).unwrap();
    assert_eq!(doc.kind, NodeKind::Document);
    assert_eq!(doc.children.len(), 2);
    assert_eq!(doc.children[0].kind, NodeKind::Heading(2));
    assert_eq!(doc.children[0].text_content(), "Verse one");
    assert_eq!(doc.children[1].text_content(), "[Am]Hello\n[C]World");
}

#[test]
fn test_heading_texts_only_top_levels() {
    let doc = ContentNode::with_children(
        NodeKind::Document,
        vec![
            ContentNode::heading(1, "Intro"),
            ContentNode::paragraph("la la"),
            ContentNode::heading(3, "Note"),
            ContentNode::with_children(NodeKind::Quote, vec![ContentNode::heading(2, "Quoted")]),
        ],
    );
    assert_eq!(doc.heading_texts(), vec!["Intro", "Quoted"]);
}
