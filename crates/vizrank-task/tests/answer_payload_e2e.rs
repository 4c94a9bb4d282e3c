//! End-to-end: JSON parameters in, gestures through the engine, answer
//! payload JSON out — the full path a hosting survey runner exercises.

use std::cell::RefCell;
use std::rc::Rc;

use vizrank_core::event::InputEvent;
use vizrank_core::sequencer::SessionSeed;
use vizrank_task::{
    Answer, RANKING_QUESTION_KEY, RankingTask, SelectionTask, TaskParameters,
};

fn parameters() -> TaskParameters {
    serde_json::from_str(
        r#"{
            "dataset": "clean_data",
            "selection": ["Norway"],
            "numRandomSamples": 5,
            "numQuantiles": 5
        }"#,
    )
    .expect("parameters json")
}

#[test]
fn ranking_payload_tracks_gestures() {
    let payloads: Rc<RefCell<Vec<serde_json::Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink_payloads = Rc::clone(&payloads);

    let mut task = RankingTask::with_seed(&parameters(), SessionSeed::new("1700000000000"))
        .on_answer(move |answer: &Answer| {
            sink_payloads
                .borrow_mut()
                .push(serde_json::to_value(answer).expect("serialize answer"));
        });

    let initial = task.engine().committed_order().to_vec();
    assert_eq!(initial.len(), 4, "four guardrail charts");

    // Initial payload: complete, carrying the seeded order.
    {
        let payloads = payloads.borrow();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0]["status"], serde_json::json!(true));
        let ranked = payloads[0]["answers"][RANKING_QUESTION_KEY]
            .as_array()
            .expect("ranking array");
        assert_eq!(ranked.len(), 4);
    }

    // Drag the top chart onto the bottom slot and drop.
    task.handle(InputEvent::DragStart(initial[0].clone()));
    task.handle(InputEvent::DragOverTarget(initial[3].clone()));
    task.handle(InputEvent::Drop(initial[3].clone()));

    {
        let payloads = payloads.borrow();
        assert_eq!(payloads.len(), 2, "one commit, one emit");
        let ranked: Vec<String> = payloads[1]["answers"][RANKING_QUESTION_KEY]
            .as_array()
            .expect("ranking array")
            .iter()
            .map(|v| v.as_str().expect("string id").to_string())
            .collect();
        assert_eq!(ranked[3], initial[0].as_str(), "dragged chart is now last");
        assert_eq!(ranked[0], initial[1].as_str());
    }

    // Reset restores the seeded baseline.
    task.handle(InputEvent::Reset);
    {
        let payloads = payloads.borrow();
        assert_eq!(payloads.len(), 3);
        let ranked: Vec<String> = payloads[2]["answers"][RANKING_QUESTION_KEY]
            .as_array()
            .expect("ranking array")
            .iter()
            .map(|v| v.as_str().expect("string id").to_string())
            .collect();
        let baseline: Vec<String> = initial.iter().map(|id| id.as_str().to_string()).collect();
        assert_eq!(ranked, baseline);
    }
}

#[test]
fn selection_payload_toggles_status() {
    let payloads: Rc<RefCell<Vec<serde_json::Value>>> = Rc::new(RefCell::new(Vec::new()));
    let sink_payloads = Rc::clone(&payloads);

    let mut task = SelectionTask::with_seed(&parameters(), SessionSeed::new("1700000000000"))
        .on_answer(move |answer: &Answer| {
            sink_payloads
                .borrow_mut()
                .push(serde_json::to_value(answer).expect("serialize answer"));
        });

    assert_eq!(
        payloads.borrow()[0],
        serde_json::json!({"status": false, "answers": {}})
    );

    let pick = task.engine().base_sequence()[1].clone();
    task.toggle(&pick);
    assert_eq!(
        payloads.borrow()[1],
        serde_json::json!({
            "status": true,
            "answers": {"condition": pick.as_str()}
        })
    );

    task.toggle(&pick);
    assert_eq!(
        payloads.borrow()[2],
        serde_json::json!({"status": false, "answers": {}})
    );
}

#[test]
fn two_runs_with_one_seed_share_a_layout() {
    let params = parameters();
    let a = RankingTask::with_seed(&params, SessionSeed::new("replay-me"));
    let b = RankingTask::with_seed(&params, SessionSeed::new("replay-me"));
    assert_eq!(a.engine().base_sequence(), b.engine().base_sequence());
    assert_eq!(
        serde_json::to_value(a.current_answer()).expect("a"),
        serde_json::to_value(b.current_answer()).expect("b"),
    );
}
