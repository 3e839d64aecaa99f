//! Sequential execution of planned fetcher invocations.
//!
//! Each child process runs to completion before the next one starts. Exit
//! statuses are logged and recorded in the [`StepOutcome`] list but never
//! acted upon: a fetcher that exits nonzero, dies on a signal, or cannot be
//! spawned at all still hands control to the next fetcher in the plan.
//! There are no retries and no timeouts.
//!
//! # Architecture
//!
//! The module uses a trait seam for testability:
//! - [`Invoke`]: Core trait for running one invocation
//! - [`ProcessInvoker`]: Runs the invocation as a real child process via
//!   `tokio::process`, with inherited stdout/stderr (the fetchers do their
//!   own logging and file writes)
//! - [`run_sequence`]: Drives any [`Invoke`] implementation over a plan

use crate::models::{Invocation, StepOutcome};
use itertools::Itertools;
use std::error::Error;
use std::path::Path;
use std::time::Instant;
use tokio::process::Command;
use tracing::{error, info, instrument, warn};

/// Trait for running a single fetcher invocation.
///
/// Implementors run the invocation to completion and report the child's exit
/// code (`None` when the child was killed by a signal). Errors mean the
/// child never started.
pub trait Invoke {
    /// Run one invocation to completion.
    ///
    /// # Arguments
    ///
    /// * `invocation` - The planned call to execute
    ///
    /// # Returns
    ///
    /// The child's exit code, or an error if it could not be spawned.
    async fn invoke(&self, invocation: &Invocation) -> Result<Option<i32>, Box<dyn Error>>;
}

/// Runs invocations as real child processes.
///
/// The child's argv is `{python} {scripts_dir}/{program} {args...}`, the
/// same shape the original shell wrappers produced. Stdout and stderr are
/// inherited so fetcher output interleaves with the runner's own logging,
/// exactly as it did under the shell.
#[derive(Debug, Clone)]
pub struct ProcessInvoker {
    /// Python interpreter used to run the fetchers.
    pub python: String,
    /// Directory containing the fetcher scripts.
    pub scripts_dir: String,
}

impl ProcessInvoker {
    /// Render the full command line this invoker would execute, interpreter
    /// and script path included. Used for dry runs and spawn logging.
    pub fn render_command(&self, invocation: &Invocation) -> String {
        let script = Path::new(&self.scripts_dir).join(&invocation.program);
        std::iter::once(self.python.clone())
            .chain(std::iter::once(script.display().to_string()))
            .chain(invocation.args.iter().cloned())
            .join(" ")
    }
}

impl Invoke for ProcessInvoker {
    #[instrument(level = "info", skip_all, fields(fetcher = %invocation.fetcher))]
    async fn invoke(&self, invocation: &Invocation) -> Result<Option<i32>, Box<dyn Error>> {
        let script = Path::new(&self.scripts_dir).join(&invocation.program);
        let status = Command::new(&self.python)
            .arg(&script)
            .args(&invocation.args)
            .status()
            .await?;
        Ok(status.code())
    }
}

/// Run every invocation in the plan, strictly in order.
///
/// Always returns one outcome per planned invocation; nothing a child does
/// (or fails to do) shortens the sequence.
#[instrument(level = "info", skip_all, fields(steps = plan.len()))]
pub async fn run_sequence<I: Invoke>(invoker: &I, plan: &[Invocation]) -> Vec<StepOutcome> {
    let total = plan.len();
    let mut outcomes = Vec::with_capacity(total);

    for (i, invocation) in plan.iter().enumerate() {
        let step = i + 1;
        info!(
            step,
            total,
            fetcher = %invocation.fetcher,
            command = %invocation.command_line(),
            "Starting fetcher"
        );
        let t0 = Instant::now();

        let outcome = match invoker.invoke(invocation).await {
            Ok(exit_code) => {
                let duration_ms = t0.elapsed().as_millis() as u64;
                match exit_code {
                    Some(0) => info!(
                        step,
                        fetcher = %invocation.fetcher,
                        duration_ms,
                        "Fetcher completed"
                    ),
                    Some(code) => warn!(
                        step,
                        fetcher = %invocation.fetcher,
                        exit_code = code,
                        duration_ms,
                        "Fetcher exited nonzero; continuing"
                    ),
                    None => warn!(
                        step,
                        fetcher = %invocation.fetcher,
                        duration_ms,
                        "Fetcher terminated by signal; continuing"
                    ),
                }
                StepOutcome::completed(invocation, exit_code, duration_ms)
            }
            Err(e) => {
                let duration_ms = t0.elapsed().as_millis() as u64;
                error!(
                    step,
                    fetcher = %invocation.fetcher,
                    error = %e,
                    "Fetcher failed to start; continuing"
                );
                StepOutcome::failed_to_start(invocation, &e.to_string(), duration_ms)
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Records call order and replays scripted results.
    struct ScriptedInvoker {
        calls: Mutex<Vec<String>>,
        results: Mutex<VecDeque<Result<Option<i32>, String>>>,
    }

    impl ScriptedInvoker {
        fn new(results: Vec<Result<Option<i32>, String>>) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                results: Mutex::new(results.into()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Invoke for ScriptedInvoker {
        async fn invoke(&self, invocation: &Invocation) -> Result<Option<i32>, Box<dyn Error>> {
            self.calls.lock().unwrap().push(invocation.command_line());
            match self.results.lock().unwrap().pop_front() {
                Some(Ok(code)) => Ok(code),
                Some(Err(message)) => Err(message.into()),
                None => Ok(Some(0)),
            }
        }
    }

    fn plan_of(names: &[&str]) -> Vec<Invocation> {
        names
            .iter()
            .map(|name| Invocation {
                fetcher: name.to_string(),
                program: format!("fetch_{name}.py"),
                args: vec!["--start_date".to_string(), "2023-01-01".to_string()],
            })
            .collect()
    }

    #[tokio::test]
    async fn test_invocations_run_in_plan_order() {
        let plan = plan_of(&["fiction", "startups", "nyt_opeds"]);
        let invoker = ScriptedInvoker::new(Vec::new());

        let outcomes = run_sequence(&invoker, &plan).await;

        assert_eq!(
            invoker.calls(),
            vec![
                "fetch_fiction.py --start_date 2023-01-01",
                "fetch_startups.py --start_date 2023-01-01",
                "fetch_nyt_opeds.py --start_date 2023-01-01",
            ]
        );
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes.iter().all(|o| o.success));
    }

    #[tokio::test]
    async fn test_failures_do_not_stop_the_sequence() {
        let plan = plan_of(&["fiction", "startups", "nyt_opeds"]);
        let invoker = ScriptedInvoker::new(vec![
            Err("No such file or directory".to_string()),
            Ok(Some(2)),
            Ok(Some(0)),
        ]);

        let outcomes = run_sequence(&invoker, &plan).await;

        assert_eq!(outcomes.len(), 3);
        assert!(!outcomes[0].success);
        assert_eq!(
            outcomes[0].error.as_deref(),
            Some("No such file or directory")
        );
        assert!(!outcomes[1].success);
        assert_eq!(outcomes[1].exit_code, Some(2));
        assert!(outcomes[2].success);
    }

    #[tokio::test]
    async fn test_process_invoker_reports_exit_codes() {
        let invocation = Invocation {
            fetcher: "fiction".to_string(),
            program: "fetch_fiction.py".to_string(),
            args: Vec::new(),
        };

        // `true` and `false` stand in for the interpreter; both ignore the
        // script path argument.
        let ok = ProcessInvoker {
            python: "true".to_string(),
            scripts_dir: ".".to_string(),
        };
        assert_eq!(ok.invoke(&invocation).await.unwrap(), Some(0));

        let failing = ProcessInvoker {
            python: "false".to_string(),
            scripts_dir: ".".to_string(),
        };
        assert_eq!(failing.invoke(&invocation).await.unwrap(), Some(1));

        let missing = ProcessInvoker {
            python: "corpus-fetch-no-such-interpreter".to_string(),
            scripts_dir: ".".to_string(),
        };
        assert!(missing.invoke(&invocation).await.is_err());
    }

    #[test]
    fn test_render_command_includes_interpreter_and_path() {
        let invoker = ProcessInvoker {
            python: "python3".to_string(),
            scripts_dir: "scripts".to_string(),
        };
        let invocation = Invocation {
            fetcher: "fiction".to_string(),
            program: "fetch_fiction.py".to_string(),
            args: vec!["--pilot".to_string()],
        };

        assert_eq!(
            invoker.render_command(&invocation),
            "python3 scripts/fetch_fiction.py --pilot"
        );
    }
}
