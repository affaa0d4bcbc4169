use std::sync::Arc;

use ayurskin_core::analyzer::{IntakeState, PhotoIntake};
use ayurskin_core::questionnaire::{default_questionnaire, Advance, QuestionnaireSession};
use ayurskin_core::results::{dominant_dosha, percentages};
use ayurskin_core::*;

/// (vata, pitta, kapha) per option, per question, in question order.
const WEIGHTS: [[(u32, u32, u32); 4]; 6] = [
    [(3, 0, 0), (0, 3, 0), (0, 0, 3), (1, 1, 1)],
    [(3, 0, 0), (0, 3, 0), (0, 0, 3), (1, 1, 1)],
    [(2, 1, 0), (0, 3, 0), (0, 1, 2), (1, 1, 1)],
    [(3, 0, 0), (0, 3, 0), (0, 0, 3), (1, 1, 1)],
    [(3, 0, 0), (0, 3, 0), (0, 0, 3), (1, 1, 1)],
    [(3, 0, 0), (0, 3, 0), (0, 0, 3), (1, 1, 1)],
];

fn expected_scores(choices: &[usize; 6]) -> DoshaScores {
    let mut expected = DoshaScores::default();
    for (question, &choice) in choices.iter().enumerate() {
        let (v, p, k) = WEIGHTS[question][choice];
        expected += DoshaScores::new(v, p, k);
    }
    expected
}

fn new_session() -> QuestionnaireSession {
    QuestionnaireSession::new(Arc::new(default_questionnaire()))
}

fn run_questionnaire(choices: &[usize; 6]) -> DoshaScores {
    let mut session = new_session();
    for (i, &choice) in choices.iter().enumerate() {
        session.select(choice).unwrap();
        match session.advance().unwrap() {
            Advance::Next(next) => assert_eq!(next, i + 1),
            Advance::Complete(scores) => {
                assert_eq!(i, choices.len() - 1, "completed early");
                return scores;
            }
        }
    }
    panic!("questionnaire never completed");
}

/// Every possible answer combination for the six questions.
fn all_choices() -> impl Iterator<Item = [usize; 6]> {
    (0..4usize.pow(6)).map(|mut n| {
        let mut choices = [0usize; 6];
        for slot in choices.iter_mut() {
            *slot = n % 4;
            n /= 4;
        }
        choices
    })
}

#[test]
fn test_embedded_table_matches_reference_weights() {
    let q = default_questionnaire();
    for (qi, question) in q.questions().iter().enumerate() {
        for (oi, option) in question.options.iter().enumerate() {
            let (v, p, k) = WEIGHTS[qi][oi];
            assert_eq!(
                (option.vata, option.pitta, option.kapha),
                (v, p, k),
                "question {} option {}",
                question.id,
                oi
            );
        }
    }
}

#[test]
fn test_first_option_everywhere() {
    let choices = [0; 6];
    let scores = run_questionnaire(&choices);
    assert_eq!(scores, expected_scores(&choices));
    assert_eq!(dominant_dosha(&scores), Ok(Dosha::Vata));
}

#[test]
fn test_every_combination_scores_the_elementwise_sum() {
    for choices in all_choices() {
        let scores = run_questionnaire(&choices);
        assert_eq!(scores, expected_scores(&choices), "{:?}", choices);
        assert!(scores.total() >= 6);

        let sum: f64 = percentages(&scores).unwrap().iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_answer_order_does_not_matter() {
    let choices = [2, 0, 1, 3, 2, 1];

    // Visit questions out of order by jumping to the end and walking back.
    let mut session = new_session();
    for _ in 0..5 {
        session.select(3).unwrap();
        session.advance().unwrap();
    }
    for i in (0..6).rev() {
        session.select(choices[i]).unwrap();
        if i > 0 {
            session.retreat().unwrap();
        }
    }
    for _ in 0..5 {
        session.advance().unwrap();
    }
    let scores = match session.advance().unwrap() {
        Advance::Complete(scores) => scores,
        other => panic!("expected completion, got {:?}", other),
    };

    assert_eq!(scores, run_questionnaire(&choices));
}

#[test]
fn test_back_and_forth_without_changes_keeps_scores() {
    let choices = [1, 2, 0, 3, 1, 2];
    let direct = run_questionnaire(&choices);

    let mut session = new_session();
    for &choice in &choices[..5] {
        session.select(choice).unwrap();
        session.advance().unwrap();
    }
    for _ in 0..5 {
        session.retreat().unwrap();
    }
    assert_eq!(session.selected_option(), Some(choices[0]));
    for _ in 0..5 {
        assert!(session.can_advance());
        session.advance().unwrap();
    }
    session.select(choices[5]).unwrap();
    assert_eq!(session.advance().unwrap(), Advance::Complete(direct));
}

#[test]
fn test_unanswered_question_blocks_completion() {
    let mut session = new_session();
    for _ in 0..5 {
        session.select(0).unwrap();
        session.advance().unwrap();
    }
    assert!(session.is_last_question());
    assert_eq!(
        session.advance(),
        Err(QuestionnaireError::NoSelection("stress-response".to_string()))
    );
    assert!(!session.is_complete());
}

#[test]
fn test_all_balanced_answers_tie_to_vata() {
    let scores = run_questionnaire(&[3; 6]);
    assert_eq!(scores, DoshaScores::new(6, 6, 6));
    assert_eq!(dominant_dosha(&scores), Ok(Dosha::Vata));
}

#[test]
fn test_non_image_upload_does_not_advance_wizard() {
    let mut wizard = WizardState::new();
    wizard.begin().unwrap();

    let mut intake = PhotoIntake::new();
    let upload = ImageUpload::new("notes.txt", "text/plain", b"hello".to_vec());
    let err = intake.begin(&upload).unwrap_err();

    assert!(matches!(err, AyurSkinError::InvalidFileType(_)));
    assert_eq!(intake.state(), &IntakeState::Idle);
    assert_eq!(wizard.step(), WizardStep::Photo);
}

#[test]
fn test_full_wizard_run() {
    let provider = MockAnalysisProvider::new(MockAnalysisConfig::default(), 2024);
    let mut wizard = WizardState::new();
    wizard.begin().unwrap();

    let mut intake = PhotoIntake::new();
    let upload = ImageUpload::new("face.jpg", "image/jpeg", vec![0xff, 0xd8]);
    let ticket = intake.begin(&upload).unwrap();
    let analysis = intake.finish(ticket, &provider, &upload).unwrap().unwrap();
    wizard.record_analysis(analysis).unwrap();

    let choices = [1, 1, 1, 0, 2, 1];
    wizard.record_scores(run_questionnaire(&choices)).unwrap();

    let report = wizard.report().unwrap().unwrap();
    assert_eq!(report.scores, expected_scores(&choices));
    assert_eq!(report.dominant, Dosha::Pitta);
    assert_eq!(report.profile.name, "Pitta");
    assert_eq!(report.analysis, analysis);
    assert!(report.modern_advice.len() >= 2);
    assert_eq!(
        report.modern_advice.last().map(String::as_str),
        Some("Gentle cleansing twice daily")
    );

    wizard.start_over().unwrap();
    intake.reset();
    assert_eq!(wizard.step(), WizardStep::Welcome);
    assert!(wizard.report().is_none());
}

#[test]
fn test_late_analysis_after_cancel_is_dropped() {
    let provider = MockAnalysisProvider::new(MockAnalysisConfig::default(), 1);
    let mut intake = PhotoIntake::new();
    let upload = ImageUpload::new("face.webp", "image/webp", vec![]);

    let ticket = intake.begin(&upload).unwrap();
    intake.cancel();
    assert_eq!(intake.finish(ticket, &provider, &upload).unwrap(), None);
}
