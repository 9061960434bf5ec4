use serde_json::{Value, json};

/// A raw article as the writing stage stores it: prompt echo, title, lead,
/// sections with citations, a formula and a quoted reference line.
pub const RAW_ARTICLE: &str = "\
You are writing a Wikipedia-style article.
Write the lead section:
# Quantum computing
Quantum computers cost over $10M [1].

## History
Early proposals date to 1980 [2][3].

### Shor's algorithm
Factoring in polynomial time [2].

## Hardware
Superconducting qubits [1 | 3].

[1]: \"IBM Quantum\" https://ibm.example/quantum";

/// `url_to_info.json` matching [`RAW_ARTICLE`].
pub fn citations_json() -> Value {
    json!({
        "url_to_unified_index": {
            "https://ibm.example/quantum": 1,
            "https://history.example/qc": 2,
            "https://hw.example/qubits": 3
        },
        "url_to_info": {
            "https://ibm.example/quantum": {
                "title": "IBM Quantum",
                "snippets": ["A system costs $10M.", "Cloud access."],
                "description": "ignored"
            },
            "https://history.example/qc": { "title": "History of QC", "snippets": [] },
            "https://hw.example/qubits": { "title": "Qubit hardware" }
        }
    })
}

/// `conversation_log.json` with two personas.
pub fn conversation_log_json() -> Value {
    json!([
        {
            "perspective": "Physicist: studies qubit decoherence",
            "dlg_turns": [
                {
                    "user_utterance": "How long do qubits last?",
                    "agent_utterance": "Microseconds [1] | [2].",
                    "search_queries": ["qubit coherence time"]
                }
            ]
        },
        {
            "perspective": "Basic fact writer",
            "dlg_turns": []
        }
    ])
}

/// A serialized knowledge tree, four levels deep.
pub fn knowledge_tree_json() -> Value {
    json!({
        "name": "root",
        "children": [
            {
                "name": "Background",
                "children": [
                    { "name": "Physics", "children": [
                        { "name": "Entanglement", "children": [
                            { "name": "Too deep", "children": [] }
                        ]}
                    ]}
                ]
            },
            { "name": "Applications", "children": [] }
        ]
    })
}
