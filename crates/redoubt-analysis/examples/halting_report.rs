//! Halting-analysis report over a small sample federation.
//!
//! Run with:
//! ```text
//! cargo run -p redoubt-analysis --example halting_report
//! ```

use redoubt_analysis::halting_analysis;
use redoubt_topology::{NetworkNode, QuorumMember, QuorumSet};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redoubt_analysis=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let nodes = sample_federation();
    let failures = halting_analysis(&nodes, 1)?;

    println!("analyzed {} nodes, {} halting risk(s)", nodes.len(), failures.len());
    for failure in &failures {
        let affected: Vec<&str> = failure.affected.iter().map(|n| n.id.as_str()).collect();
        println!(
            "  losing {:10} halts the home node; also affected: {}",
            failure.vulnerable.id,
            affected.join(", "),
        );
    }

    Ok(())
}

/// Two organizations plus one validator both of them depend on. The
/// analysis flags the shared validator and the thin west organization's
/// only other member as halting risks.
fn sample_federation() -> Vec<NetworkNode> {
    let home_set = QuorumSet::new(
        2,
        vec![
            QuorumMember::Inner(QuorumSet::of_validators(2, ["shared", "east-1", "east-2"])),
            QuorumMember::Inner(QuorumSet::of_validators(2, ["shared", "west-1"])),
        ],
    );

    let mut nodes = vec![NetworkNode::new("home", home_set, 0)];
    for id in ["shared", "east-1", "east-2", "west-1"] {
        nodes.push(NetworkNode::new(id, QuorumSet::empty(), 1));
    }
    nodes
}
