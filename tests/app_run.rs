use bili_daily_task::testing::{Call, LoginBehavior, MockBili};
use bili_daily_task::{App, Config, Locale, RunOutcome, ShutdownSignal};
use std::fs;

#[tokio::test]
async fn test_completed_run_reports_success() {
    let (mock, services) = MockBili::new().into_services();
    let app = App::without_logging(Config::default(), services);

    let outcome = app.run(&ShutdownSignal::never()).await;

    assert!(outcome.is_success());
    match outcome {
        RunOutcome::Completed(ctx) => assert!(ctx.user_info.is_some()),
        RunOutcome::Aborted { task, .. } => panic!("不应终止于 {}", task),
    }
    assert_eq!(mock.count(Call::Charge).await, 1);
}

#[tokio::test]
async fn test_partial_failures_still_report_success() {
    let (_mock, services) = MockBili::new()
        .failing(Call::LiveSign)
        .failing(Call::Charge)
        .into_services();
    let app = App::without_logging(Config::default(), services);

    assert!(app.run(&ShutdownSignal::never()).await.is_success());
}

#[tokio::test]
async fn test_login_failure_reports_aborted_task() {
    let (mock, services) = MockBili::new()
        .with_login(LoginBehavior::NoUser)
        .into_services();
    let app = App::without_logging(Config::default(), services);

    let outcome = app.run(&ShutdownSignal::never()).await;

    assert!(!outcome.is_success());
    match outcome {
        RunOutcome::Aborted { task, reason } => {
            assert_eq!(task, "登录");
            assert!(reason.contains("登录失败，请检查Cookie"), "原因: {}", reason);
        }
        RunOutcome::Completed(_) => panic!("登录失败时应终止"),
    }
    assert_eq!(mock.calls().await, vec![Call::Login]);
}

#[tokio::test]
async fn test_aborted_task_name_follows_locale() {
    let (_mock, services) = MockBili::new()
        .with_login(LoginBehavior::Fail)
        .into_services();
    let config = Config {
        locale: Locale::EnUs,
        ..Default::default()
    };
    let app = App::without_logging(config, services);

    match app.run(&ShutdownSignal::never()).await {
        RunOutcome::Aborted { task, .. } => assert_eq!(task, "Login"),
        RunOutcome::Completed(_) => panic!("登录失败时应终止"),
    }
}

#[tokio::test]
async fn test_config_file_drives_the_pipeline() {
    let path = std::env::temp_dir().join(format!("bili_daily_task_{}.toml", std::process::id()));
    fs::write(
        &path,
        r#"
        [daily_task]
        is_watch_video = false
        is_share_video = false
        "#,
    )
    .expect("写入配置文件失败");

    let config = Config::load(&path).expect("加载配置文件失败");
    fs::remove_file(&path).ok();

    let (mock, services) = MockBili::new().into_services();
    let app = App::without_logging(config, services);

    assert!(app.run(&ShutdownSignal::never()).await.is_success());
    assert_eq!(mock.count(Call::WatchAndShare).await, 0);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let err = Config::load("/definitely/not/here/bili.toml").unwrap_err();
    assert!(err.to_string().contains("读取配置文件失败"));
}
