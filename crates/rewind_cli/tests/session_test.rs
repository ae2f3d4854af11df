//! End-to-end tests for the session loop.

use rewind_cli::{AppConfig, EmitMode, OutputFormat, Session};
use rewind_tictactoe::{GameView, JumpPolicy, Phase, Player};

async fn run_script(
    config: AppConfig,
    emit: EmitMode,
    script: &'static str,
) -> (String, String) {
    let mut out = Vec::<u8>::new();
    let mut err = Vec::<u8>::new();
    Session::new(config, emit, &mut out, &mut err)
        .run(script.as_bytes())
        .await
        .expect("session runs");
    (
        String::from_utf8(out).expect("utf-8 output"),
        String::from_utf8(err).expect("utf-8 diagnostics"),
    )
}

fn json_views(out: &str) -> Vec<GameView> {
    out.lines()
        .map(|line| serde_json::from_str(line).expect("one view per line"))
        .collect()
}

#[tokio::test]
async fn test_json_views_after_each_accepted_intent() {
    let config = AppConfig::default().with_format(OutputFormat::Json);
    let (out, err) = run_script(config, EmitMode::EveryChange, "0\n4\n4\n8\njump 1\n").await;

    let views = json_views(&out);
    // Startup view plus four accepted intents.
    assert_eq!(views.len(), 5);
    assert_eq!(views[0].status, "Next player: X");
    assert_eq!(views[3].moves.len(), 4);

    let last = views.last().unwrap();
    assert_eq!(last.moves.len(), 2);
    assert_eq!(last.status, "Next player: O");

    assert_eq!(err, "line 3: ignored click 4: Center is already occupied\n");
}

#[tokio::test]
async fn test_replay_prints_final_view_only() {
    let config = AppConfig::default().with_format(OutputFormat::Json);
    let script = "# left column for X\nclick 0\nclick 1\nclick 3\nclick 4\nclick 6\n";
    let (out, err) = run_script(config, EmitMode::FinalOnly, script).await;

    let views = json_views(&out);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].status, "Winner: X");
    assert_eq!(views[0].phase, Phase::Concluded { winner: Player::X });
    assert!(err.is_empty());
}

#[tokio::test]
async fn test_text_view_command() {
    let (out, _) = run_script(AppConfig::default(), EmitMode::FinalOnly, "center\nview\n").await;

    let expected_view = "0|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8\nNext player: O\n   0. Game start\n>  1. Move #1\n";
    // Once for `view`, once at the end.
    assert_eq!(out, format!("{expected_view}{expected_view}"));
}

#[tokio::test]
async fn test_bad_lines_are_reported_and_skipped() {
    let (out, err) = run_script(
        AppConfig::default().with_format(OutputFormat::Json),
        EmitMode::FinalOnly,
        "dance\nclick 9\njump 5\n2\n",
    )
    .await;

    let views = json_views(&out);
    assert_eq!(views[0].moves.len(), 2);
    assert_eq!(
        err,
        "line 1: Unknown command: dance\n\
         line 2: ignored click 9: Cell 9 is out of range (must be 0-8)\n\
         line 3: ignored jump 5: Ply 5 is out of range (history has 1 boards)\n"
    );
}

#[tokio::test]
async fn test_clamp_policy_from_config() {
    let config = AppConfig::default()
        .with_format(OutputFormat::Json)
        .with_jump_policy(JumpPolicy::Clamp);
    let (out, err) = run_script(config, EmitMode::FinalOnly, "0\n1\njump 40\n").await;

    assert_eq!(json_views(&out)[0].moves.len(), 3);
    assert!(err.is_empty());
}

#[tokio::test]
async fn test_echo_disabled_keeps_stderr_quiet() {
    let config = AppConfig::default().with_echo_rejections(false);
    let (_, err) = run_script(config, EmitMode::FinalOnly, "0\n0\nnonsense\n").await;
    assert!(err.is_empty());
}
