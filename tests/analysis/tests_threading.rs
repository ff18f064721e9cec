//! Sharing one tree across threads.

use std::sync::Arc;
use std::thread;

use nesc_refactor::syntax::SourceTree;

use crate::helpers::analyzer_helpers::analyzer_for;
use crate::helpers::component_fixtures::radio_stack;

#[test]
fn test_one_analyzer_per_thread_over_shared_tree() {
    let tree: Arc<SourceTree> = Arc::new(radio_stack().build());

    let handles: Vec<_> = ["Control", "Send", "BackoffTimer", "Receive"]
        .into_iter()
        .map(|alias| {
            let tree = Arc::clone(&tree);
            thread::spawn(move || {
                let analyzer = analyzer_for(&tree, "RadioStackC");
                analyzer
                    .interface_name_for_alias_name(alias)
                    .unwrap()
                    .map(|name| name.to_string())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![
            Some("SplitControl".to_string()),
            Some("AMSend".to_string()),
            Some("Timer".to_string()),
            None,
        ]
    );
}
