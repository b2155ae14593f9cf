use cfprov_infrastructure::constants::INTERRUPT_EXIT_CODE;
use cfprov_infrastructure::interrupt::{InterruptOutcome, InterruptRegistry};
use tokio_util::sync::CancellationToken;

#[test]
fn test_interrupt_cancels_the_running_pass() {
    let registry = InterruptRegistry::new();
    let cancel = CancellationToken::new();
    let _pass = registry.register(cancel.clone());

    assert_eq!(registry.interrupt(), InterruptOutcome::Cancelled(1));
    assert!(cancel.is_cancelled());
}

#[test]
fn test_interrupt_without_a_pass_reports_nothing_to_cancel() {
    let registry = InterruptRegistry::new();

    assert_eq!(registry.interrupt(), InterruptOutcome::NoActivePass);
}

#[test]
fn test_finished_pass_is_no_longer_interruptible() {
    let registry = InterruptRegistry::new();
    let cancel = CancellationToken::new();
    {
        let _pass = registry.register(cancel.clone());
        assert_eq!(registry.active_passes(), 1);
    }

    assert_eq!(registry.active_passes(), 0);
    assert_eq!(registry.interrupt(), InterruptOutcome::NoActivePass);
    assert!(!cancel.is_cancelled());
}

#[test]
fn test_second_interrupt_while_the_pass_unwinds_has_nothing_to_cancel() {
    let registry = InterruptRegistry::new();
    let _pass = registry.register(CancellationToken::new());

    assert_eq!(registry.interrupt(), InterruptOutcome::Cancelled(1));
    assert_eq!(registry.interrupt(), InterruptOutcome::NoActivePass);
}

#[test]
fn test_interrupt_cancels_every_concurrent_pass() {
    let registry = InterruptRegistry::new();
    let first = CancellationToken::new();
    let second = CancellationToken::new();
    let _first = registry.register(first.clone());
    let _second = registry.register(second.clone());

    assert_eq!(registry.interrupt(), InterruptOutcome::Cancelled(2));
    assert!(first.is_cancelled());
    assert!(second.is_cancelled());
}

#[tokio::test]
async fn test_registered_pass_sees_cancellation() {
    let registry = InterruptRegistry::new();
    let cancel = CancellationToken::new();
    let _pass = registry.register(cancel.clone());

    let waiter = tokio::spawn({
        let cancel = cancel.clone();
        async move { cancel.cancelled().await }
    });
    registry.interrupt();

    tokio::time::timeout(std::time::Duration::from_secs(1), waiter)
        .await
        .expect("pass observes the interrupt")
        .expect("waiter does not panic");
}

#[test]
fn test_interrupt_exit_code_is_sigint_convention() {
    assert_eq!(INTERRUPT_EXIT_CODE, 130);
}
