// bridge.rs - Forwards chat messages from one Discord channel into the game inbox

use std::sync::Arc;

use anyhow::{Context as _, Result, bail};
use serenity::async_trait;
use serenity::gateway::ShardManager;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::{Client, Context, EventHandler, GatewayIntents};
use snake_state::MessageSender;
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;

/// Decides which chat messages reach the game.
#[derive(Debug, Clone, Copy)]
pub struct InboundFilter {
    channel_id: u64,
}

impl InboundFilter {
    pub fn new(channel_id: u64) -> Self {
        Self { channel_id }
    }

    /// Accepts messages on the designated channel that the bot did not write itself.
    pub fn accepts(&self, channel_id: u64, author_id: u64, own_id: u64) -> bool {
        channel_id == self.channel_id && author_id != own_id
    }
}

struct Handler {
    filter: InboundFilter,
    outbox: MessageSender,
    ready: Mutex<Option<oneshot::Sender<()>>>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(bot = %ready.user.name, "chat session ready");
        if let Some(tx) = self.ready.lock().await.take() {
            let _ = tx.send(());
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let own_id = ctx.cache.current_user().id.get();
        if !self.filter.accepts(msg.channel_id.get(), msg.author.id.get(), own_id) {
            return;
        }

        debug!(author = %msg.author.name, content = %msg.content, "chat message");
        if !self.outbox.send(msg.content) {
            warn!("game inbox closed, dropping chat message");
        }
    }
}

/// A connected gateway client feeding the game inbox.
pub struct ChatSession {
    shard_manager: Arc<ShardManager>,
    task: JoinHandle<serenity::Result<()>>,
}

/// Connects with the bot token and waits until the gateway reports ready.
pub async fn open(config: &Config, outbox: MessageSender) -> Result<ChatSession> {
    let (ready_tx, ready_rx) = oneshot::channel();
    let handler = Handler {
        filter: InboundFilter::new(config.channel_id),
        outbox,
        ready: Mutex::new(Some(ready_tx)),
    };

    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;
    let mut client = Client::builder(&config.bot_token, intents)
        .event_handler(handler)
        .await
        .context("failed to create chat client")?;

    let shard_manager = client.shard_manager.clone();
    let mut task = tokio::spawn(async move { client.start().await });

    tokio::select! {
        ready = ready_rx => ready.context("chat client stopped before it was ready")?,
        finished = &mut task => {
            finished
                .context("chat client task panicked")?
                .context("failed to open chat session")?;
            bail!("chat session ended before it was ready");
        }
    }

    Ok(ChatSession { shard_manager, task })
}

impl ChatSession {
    pub async fn close(self) {
        self.shard_manager.shutdown_all().await;
        match self.task.await {
            Ok(Ok(())) => debug!("chat session closed"),
            Ok(Err(err)) => warn!(%err, "chat session ended with an error"),
            Err(err) => warn!(%err, "chat session task failed"),
        }
    }
}
