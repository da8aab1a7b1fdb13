//! Carousel rotation task and its control handle.

use std::time::Duration;

use tokio::{
    runtime::Handle,
    sync::{mpsc, oneshot},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

use crate::{
    CarouselError, CarouselResult, Configuration, ElementSource, Presenter, RotationController,
};

/// Pending control commands queue length.
const COMMANDS_QUEUE_LEN: usize = 4;

enum Command {
    Advance(oneshot::Sender<Option<usize>>),
    Cursor(oneshot::Sender<usize>),
    Stop,
}

/// A running carousel.
///
/// The rotation task owns the controller, so timer ticks and control commands are
/// handled one at a time. Call [`Carousel::stop`] to get the controller back; dropping
/// the handle stops the task as well.
pub struct Carousel<E, P> {
    commands: mpsc::Sender<Command>,
    task: JoinHandle<RotationController<E, P>>,
}

impl<E, P> Carousel<E, P>
where
    E: Send + 'static,
    P: Presenter<E> + Send + 'static,
{
    /// Starts rotating the given controller with the configured period.
    ///
    /// The first tick happens one full period after the start. Must be called from
    /// within a tokio runtime, otherwise [`CarouselError::NoRuntime`] is returned.
    pub fn start(
        controller: RotationController<E, P>,
        config: &Configuration,
    ) -> CarouselResult<Self> {
        let config = config.validate()?;
        let runtime = Handle::try_current().map_err(|err| {
            log::warn!("Unable to start a carousel: {}", err);
            CarouselError::NoRuntime
        })?;

        let (commands, receiver) = mpsc::channel(COMMANDS_QUEUE_LEN);
        log::info!(
            "Starting a carousel of {} elements, interval: {}",
            controller.len(),
            config.interval
        );
        let task = runtime.spawn(rotation_task(controller, config.period(), receiver));
        Ok(Self { commands, task })
    }

    /// Captures the elements from the source and starts rotating them.
    pub fn launch<S>(source: S, presenter: P, config: &Configuration) -> CarouselResult<Self>
    where
        S: ElementSource<Element = E>,
    {
        let config = config.validate()?;
        let controller = RotationController::with_config(source, presenter, &config)?;
        Self::start(controller, &config)
    }

    /// Advances the carousel immediately, without waiting for the next tick.
    pub async fn advance_now(&self) -> CarouselResult<Option<usize>> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Advance(reply))
            .await
            .map_err(CarouselError::stopped)?;
        response.await.map_err(CarouselError::stopped)
    }

    /// Returns the index of the active element.
    pub async fn cursor(&self) -> CarouselResult<usize> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Cursor(reply))
            .await
            .map_err(CarouselError::stopped)?;
        response.await.map_err(CarouselError::stopped)
    }

    /// Returns `true` while the rotation task is alive.
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the timer and returns the controller.
    ///
    /// No tick is processed once this method returns.
    pub async fn stop(self) -> CarouselResult<RotationController<E, P>> {
        // The task may have already gone, in this case the join handle reports why.
        let _ = self.commands.send(Command::Stop).await;
        let controller = self.task.await.map_err(CarouselError::stopped)?;
        Ok(controller)
    }
}

async fn rotation_task<E, P>(
    mut controller: RotationController<E, P>,
    period: Duration,
    mut commands: mpsc::Receiver<Command>,
) -> RotationController<E, P>
where
    P: Presenter<E>,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            // Control commands take priority over a pending tick.
            biased;

            command = commands.recv() => match command {
                Some(Command::Advance(reply)) => {
                    let _ = reply.send(controller.advance());
                }
                Some(Command::Cursor(reply)) => {
                    let _ = reply.send(controller.cursor());
                }
                // All handles are gone.
                Some(Command::Stop) | None => break,
            },

            _ = ticker.tick() => {
                controller.advance();
            }
        }
    }

    log::info!("Carousel stopped at element {}", controller.cursor());
    controller
}
