use crate::models::{MasteryCriteria, ProgressionNode, ProgressionTree, Skill};

/// Assemble a tree from nodes listed root first and `(from, to)` links.
fn assemble(skill: Skill, nodes: Vec<ProgressionNode>, links: &[(&str, &str)]) -> ProgressionTree {
    let mut tree = ProgressionTree::new(skill);
    tree.root = nodes.first().map(|node| node.id.clone());
    for node in nodes {
        tree.nodes.insert(node.id.clone(), node);
    }
    for (from, to) in links {
        if let Some(node) = tree.nodes.get_mut(*from) {
            node.next.push(to.to_string());
        }
    }
    tree
}

pub(super) fn builtin_trees() -> Vec<ProgressionTree> {
    vec![
        handstand(),
        planche(),
        lsit(),
        ProgressionTree::new(Skill::FrontLever),
        ProgressionTree::new(Skill::BackLever),
    ]
}

fn handstand() -> ProgressionTree {
    let s = Skill::Handstand;
    assemble(
        s,
        vec![
            ProgressionNode::new("hs-wall-plank", "Wall Plank", 1, s)
                .with_workouts(&["wu-plank"])
                .with_criteria(MasteryCriteria::hold(60)),
            ProgressionNode::new("hs-pike-pushup", "Pike Push-up", 2, s)
                .with_workouts(&["st-pushup"])
                .with_prerequisites(&["hs-wall-plank"])
                .with_criteria(MasteryCriteria::reps(10)),
            ProgressionNode::new("hs-wall-walk", "Wall Walk", 3, s)
                .with_prerequisites(&["hs-wall-plank"])
                .with_criteria(MasteryCriteria::reps(5)),
            ProgressionNode::new("hs-wall-handstand", "Wall Handstand", 4, s)
                .with_workouts(&["hs-wall-hold"])
                .with_prerequisites(&["hs-pike-pushup", "hs-wall-walk"])
                .with_criteria(MasteryCriteria::hold(60)),
            ProgressionNode::new("hs-chest-to-wall", "Chest-to-Wall Handstand", 5, s)
                .with_workouts(&["hs-chest-to-wall"])
                .with_prerequisites(&["hs-wall-handstand"])
                .with_criteria(MasteryCriteria::hold(60)),
            ProgressionNode::new("hs-toe-pulls", "Handstand Toe Pulls", 6, s)
                .with_workouts(&["hs-toe-pulls"])
                .with_prerequisites(&["hs-chest-to-wall"])
                .with_criteria(MasteryCriteria::reps(10).with_consecutive_successes(3)),
            ProgressionNode::new("hs-heel-pulls", "Handstand Heel Pulls", 7, s)
                .with_workouts(&["hs-heel-pulls"])
                .with_prerequisites(&["hs-toe-pulls"])
                .with_criteria(MasteryCriteria::reps(10).with_consecutive_successes(3)),
            ProgressionNode::new("hs-freestanding", "Freestanding Handstand", 8, s)
                .with_workouts(&["hs-freestanding"])
                .with_prerequisites(&["hs-heel-pulls"])
                .with_criteria(MasteryCriteria::hold(30).with_consecutive_successes(3)),
            ProgressionNode::new("hs-freestanding-pushup", "Handstand Push-up", 9, s)
                .with_prerequisites(&["hs-freestanding"])
                .with_criteria(MasteryCriteria::reps(3).with_consecutive_successes(3)),
        ],
        &[
            ("hs-wall-plank", "hs-pike-pushup"),
            ("hs-wall-plank", "hs-wall-walk"),
            ("hs-pike-pushup", "hs-wall-handstand"),
            ("hs-wall-walk", "hs-wall-handstand"),
            ("hs-wall-handstand", "hs-chest-to-wall"),
            ("hs-chest-to-wall", "hs-toe-pulls"),
            ("hs-toe-pulls", "hs-heel-pulls"),
            ("hs-heel-pulls", "hs-freestanding"),
            ("hs-freestanding", "hs-freestanding-pushup"),
        ],
    )
}

fn planche() -> ProgressionTree {
    let s = Skill::Planche;
    assemble(
        s,
        vec![
            ProgressionNode::new("pl-plank", "Plank", 1, s)
                .with_workouts(&["pl-plank"])
                .with_criteria(MasteryCriteria::hold(60)),
            ProgressionNode::new("pl-elevated-plank", "Elevated Plank", 2, s)
                .with_workouts(&["pl-elevated-plank"])
                .with_prerequisites(&["pl-plank"])
                .with_criteria(MasteryCriteria::hold(45)),
            ProgressionNode::new("pl-pseudo-planche", "Pseudo Planche", 3, s)
                .with_workouts(&["pl-pseudo-planche"])
                .with_prerequisites(&["pl-elevated-plank"])
                .with_criteria(MasteryCriteria::hold(30)),
            ProgressionNode::new("pl-planche-leans", "Planche Leans", 4, s)
                .with_prerequisites(&["pl-pseudo-planche"])
                .with_criteria(MasteryCriteria::hold(30)),
            ProgressionNode::new("pl-tuck-planche", "Tuck Planche", 5, s)
                .with_workouts(&["pl-tuck-planche"])
                .with_prerequisites(&["pl-planche-leans"])
                .with_criteria(MasteryCriteria::hold(15).with_consecutive_successes(3)),
            ProgressionNode::new("pl-adv-tuck-planche", "Advanced Tuck Planche", 6, s)
                .with_workouts(&["pl-adv-tuck-planche"])
                .with_prerequisites(&["pl-tuck-planche"])
                .with_criteria(MasteryCriteria::hold(10).with_consecutive_successes(3)),
            ProgressionNode::new("pl-straddle-planche", "Straddle Planche", 8, s)
                .with_prerequisites(&["pl-adv-tuck-planche"])
                .with_criteria(MasteryCriteria::hold(5).with_consecutive_successes(3)),
            ProgressionNode::new("pl-full-planche", "Full Planche", 10, s)
                .with_prerequisites(&["pl-straddle-planche"])
                .with_criteria(MasteryCriteria::hold(3).with_consecutive_successes(3)),
        ],
        &[
            ("pl-plank", "pl-elevated-plank"),
            ("pl-elevated-plank", "pl-pseudo-planche"),
            ("pl-pseudo-planche", "pl-planche-leans"),
            ("pl-planche-leans", "pl-tuck-planche"),
            ("pl-tuck-planche", "pl-adv-tuck-planche"),
            ("pl-adv-tuck-planche", "pl-straddle-planche"),
            ("pl-straddle-planche", "pl-full-planche"),
        ],
    )
}

fn lsit() -> ProgressionTree {
    let s = Skill::LSit;
    assemble(
        s,
        vec![
            ProgressionNode::new("ls-foot-supported", "Foot Supported L-Sit", 1, s)
                .with_criteria(MasteryCriteria::hold(30)),
            ProgressionNode::new("ls-one-foot", "One-Foot Supported L-Sit", 2, s)
                .with_prerequisites(&["ls-foot-supported"])
                .with_criteria(MasteryCriteria::hold(30)),
            ProgressionNode::new("ls-tuck", "Tuck L-Sit", 3, s)
                .with_workouts(&["ls-supported-tuck"])
                .with_prerequisites(&["ls-one-foot"])
                .with_criteria(MasteryCriteria::hold(15).with_consecutive_successes(3)),
            ProgressionNode::new("ls-one-leg", "One-Leg L-Sit", 4, s)
                .with_workouts(&["ls-one-leg-ext"])
                .with_prerequisites(&["ls-tuck"])
                .with_criteria(MasteryCriteria::hold(15).with_consecutive_successes(3)),
            ProgressionNode::new("ls-full", "Full L-Sit", 5, s)
                .with_workouts(&["ls-full-lsit"])
                .with_prerequisites(&["ls-one-leg"])
                .with_criteria(MasteryCriteria::hold(30).with_consecutive_successes(3)),
            ProgressionNode::new("ls-v-sit", "V-Sit", 7, s)
                .with_prerequisites(&["ls-full"])
                .with_criteria(MasteryCriteria::hold(10).with_consecutive_successes(3)),
        ],
        &[
            ("ls-foot-supported", "ls-one-foot"),
            ("ls-one-foot", "ls-tuck"),
            ("ls-tuck", "ls-one-leg"),
            ("ls-one-leg", "ls-full"),
            ("ls-full", "ls-v-sit"),
        ],
    )
}
