//! Static class hierarchy: department → course → branch → year → semester.
//!
//! Compiled into the binary and never mutated. Sibling names are unique,
//! which `tests::sibling_names_are_unique` guards.

use super::Node;

macro_rules! leaf {
    ($name:expr $(,)?) => {
        Node {
            name: $name,
            children: &[],
        }
    };
}

macro_rules! node {
    ($name:expr, $children:expr $(,)?) => {
        Node {
            name: $name,
            children: $children,
        }
    };
}

const SEM_1_2: &[Node] = &[leaf!("Semester 1"), leaf!("Semester 2")];
const SEM_3_4: &[Node] = &[leaf!("Semester 3"), leaf!("Semester 4")];
const SEM_5_6: &[Node] = &[leaf!("Semester 5"), leaf!("Semester 6")];
const SEM_7_8: &[Node] = &[leaf!("Semester 7"), leaf!("Semester 8")];

const TWO_YEARS: &[Node] = &[node!("1st Year", SEM_1_2), node!("2nd Year", SEM_3_4)];

const THREE_YEARS: &[Node] = &[
    node!("1st Year", SEM_1_2),
    node!("2nd Year", SEM_3_4),
    node!("3rd Year", SEM_5_6),
];

const FOUR_YEARS: &[Node] = &[
    node!("1st Year", SEM_1_2),
    node!("2nd Year", SEM_3_4),
    node!("3rd Year", SEM_5_6),
    node!("4th Year", SEM_7_8),
];

const ENGINEERING: &[Node] = &[
    node!(
        "B.Tech",
        &[
            node!("Computer Science", FOUR_YEARS),
            node!("Electronics", FOUR_YEARS),
            node!("Mechanical", FOUR_YEARS),
            node!("Civil", FOUR_YEARS),
        ],
    ),
    node!(
        "M.Tech",
        &[
            node!("Computer Science", TWO_YEARS),
            node!("VLSI Design", TWO_YEARS),
        ],
    ),
];

const SCIENCE: &[Node] = &[
    node!(
        "B.Sc",
        &[
            node!("Physics", THREE_YEARS),
            node!("Chemistry", THREE_YEARS),
            node!("Mathematics", THREE_YEARS),
            node!("Biology", THREE_YEARS),
        ],
    ),
    node!(
        "M.Sc",
        &[node!("Physics", TWO_YEARS), node!("Mathematics", TWO_YEARS)],
    ),
];

const MANAGEMENT: &[Node] = &[
    node!("BBA", &[node!("General", THREE_YEARS)]),
    node!(
        "MBA",
        &[
            node!("Finance", TWO_YEARS),
            node!("Marketing", TWO_YEARS),
            node!("Human Resources", TWO_YEARS),
        ],
    ),
];

const COMPUTER_APPLICATIONS: &[Node] = &[
    node!("BCA", &[node!("General", THREE_YEARS)]),
    node!("MCA", &[node!("General", TWO_YEARS)]),
];

/// Root of the hierarchy: the department list.
pub static DEPARTMENTS: &[Node] = &[
    node!("Engineering", ENGINEERING),
    node!("Science", SCIENCE),
    node!("Management", MANAGEMENT),
    node!("Computer Applications", COMPUTER_APPLICATIONS),
];
