use std::{
    process::Stdio,
    sync::{Arc, RwLock},
    time::Duration,
};

use flume::{Receiver, Sender};
use tokio::{
    io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader},
    process::{Child, Command},
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::{
    embed::{
        commands::MpvCommand,
        config::EmbedConfig,
        error::EmbedError,
        ipc::{IpcTranslator, MpvMessage, PAUSE_OBSERVER, Signal, TITLE_OBSERVER},
        traits::{PlaylistEmbed, TrackInfo},
    },
    event::events::Event,
};

const CONNECT_ATTEMPTS: u32 = 60;
const CONNECT_INTERVAL: Duration = Duration::from_millis(100);

#[cfg(unix)]
type IpcStream = tokio::net::UnixStream;
#[cfg(windows)]
type IpcStream = tokio::net::windows::named_pipe::NamedPipeClient;

/// Hidden mpv instance playing a YouTube playlist, controlled over JSON IPC.
pub struct MpvEmbed {
    command_tx: Sender<MpvCommand>,
    track_info: Arc<RwLock<TrackInfo>>,
}

impl MpvEmbed {
    /// Starts the player in the background. Lifecycle events and failures are
    /// posted to `event_tx`; the returned task owns the child process.
    pub fn launch(config: EmbedConfig, event_tx: Sender<Event>) -> (Self, JoinHandle<()>) {
        let (command_tx, command_rx) = flume::unbounded();
        let track_info = Arc::new(RwLock::new(TrackInfo::default()));

        let info = track_info.clone();
        let task = tokio::spawn(async move {
            if let Err(e) = run(config, command_rx, info, event_tx.clone()).await {
                let _ = event_tx.send(Event::EmbedFailed(e.to_string()));
            }
        });

        (
            Self {
                command_tx,
                track_info,
            },
            task,
        )
    }

    fn send(&self, command: MpvCommand) {
        if self.command_tx.send(command).is_err() {
            debug!("Embed task is gone, dropping command");
        }
    }
}

impl PlaylistEmbed for MpvEmbed {
    fn play(&self) {
        self.send(MpvCommand::SetPaused(false));
    }

    fn pause(&self) {
        self.send(MpvCommand::SetPaused(true));
    }

    /// Skipping also unpauses.
    fn next(&self) {
        self.send(MpvCommand::PlaylistNext);
        self.send(MpvCommand::SetPaused(false));
    }

    fn previous(&self) {
        self.send(MpvCommand::PlaylistPrev);
        self.send(MpvCommand::SetPaused(false));
    }

    fn current_track_info(&self) -> TrackInfo {
        self.track_info
            .read()
            .map(|info| info.clone())
            .unwrap_or_default()
    }
}

pub fn launch_args(config: &EmbedConfig, socket: &str) -> Vec<String> {
    let mut args = vec![
        "--idle=yes".to_string(),
        "--no-video".to_string(),
        "--force-window=no".to_string(),
        "--no-terminal".to_string(),
        format!("--input-ipc-server={socket}"),
        "--ytdl=yes".to_string(),
        "--ytdl-format=bestaudio/best".to_string(),
    ];
    if !config.autoplay {
        args.push("--pause".to_string());
    }
    if !config.show_controls {
        args.push("--no-osc".to_string());
        args.push("--no-input-default-bindings".to_string());
    }
    args.push(config.playlist_url());
    args
}

/// IPC socket path. The socket file is removed on drop, which also covers an
/// aborted embed task.
struct SocketGuard(String);

impl SocketGuard {
    fn path(&self) -> &str {
        &self.0
    }
}

impl Drop for SocketGuard {
    fn drop(&mut self) {
        if cfg!(unix) {
            let _ = std::fs::remove_file(&self.0);
        }
    }
}

fn socket_path() -> String {
    #[cfg(unix)]
    {
        std::env::temp_dir()
            .join(format!("cassette-mpv-{}.sock", std::process::id()))
            .to_string_lossy()
            .into_owned()
    }
    #[cfg(windows)]
    {
        format!(r"\\.\pipe\cassette-mpv-{}", std::process::id())
    }
}

#[cfg(unix)]
async fn open(socket: &str) -> std::io::Result<IpcStream> {
    tokio::net::UnixStream::connect(socket).await
}

#[cfg(windows)]
async fn open(socket: &str) -> std::io::Result<IpcStream> {
    tokio::net::windows::named_pipe::ClientOptions::new().open(socket)
}

async fn connect(socket: &str, child: &mut Child) -> Result<IpcStream, EmbedError> {
    for _ in 0..CONNECT_ATTEMPTS {
        tokio::time::sleep(CONNECT_INTERVAL).await;
        match open(socket).await {
            Ok(stream) => return Ok(stream),
            Err(_) => {
                if let Some(status) = child.try_wait()? {
                    return Err(EmbedError::ExitedEarly(status.to_string()));
                }
            }
        }
    }
    Err(EmbedError::ConnectTimeout(socket.to_string()))
}

async fn run(
    config: EmbedConfig,
    command_rx: Receiver<MpvCommand>,
    track_info: Arc<RwLock<TrackInfo>>,
    event_tx: Sender<Event>,
) -> Result<(), EmbedError> {
    let socket = SocketGuard(socket_path());
    info!("Launching {} for {}", config.mpv_path, config.playlist_url());

    let mut child = Command::new(&config.mpv_path)
        .args(launch_args(&config, socket.path()))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| EmbedError::Launch {
            path: config.mpv_path.clone(),
            source,
        })?;

    let result = match connect(socket.path(), &mut child).await {
        Ok(stream) => {
            info!("Connected to embed at {}", socket.path());
            drive(stream, !config.autoplay, command_rx, track_info, event_tx).await
        }
        Err(e) => Err(e),
    };

    let _ = child.kill().await;
    result
}

async fn write_command<W>(
    writer: &mut W,
    command: &MpvCommand,
    request_id: u64,
) -> Result<(), EmbedError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(command.encode(request_id)?.as_bytes())
        .await?;
    writer.flush().await?;
    Ok(())
}

async fn drive<S>(
    stream: S,
    paused: bool,
    command_rx: Receiver<MpvCommand>,
    track_info: Arc<RwLock<TrackInfo>>,
    event_tx: Sender<Event>,
) -> Result<(), EmbedError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut lines = BufReader::new(reader).lines();
    let mut translator = IpcTranslator::new(paused);
    let mut request_id = 0u64;

    for command in [
        MpvCommand::ObserveProperty(PAUSE_OBSERVER, "pause"),
        MpvCommand::ObserveProperty(TITLE_OBSERVER, "media-title"),
    ] {
        request_id += 1;
        write_command(&mut writer, &command, request_id).await?;
    }

    loop {
        tokio::select! {
            command = command_rx.recv_async() => {
                request_id += 1;
                let Ok(command) = command else {
                    let _ = write_command(&mut writer, &MpvCommand::Quit, request_id).await;
                    return Ok(());
                };
                debug!(?command, "Sending to embed");
                write_command(&mut writer, &command, request_id).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Err(EmbedError::Closed);
                };
                let message = match MpvMessage::parse(&line) {
                    Ok(message) => message,
                    Err(e) => {
                        debug!("Skipping IPC line: {e}");
                        continue;
                    }
                };

                for signal in translator.translate(&message) {
                    match signal {
                        Signal::Title(title) => {
                            if let Ok(mut info) = track_info.write() {
                                info.title = title;
                            }
                        }
                        Signal::Ready => {
                            info!("Embed ready");
                            let _ = event_tx.send(Event::EmbedReady);
                        }
                        Signal::StateChanged(state) => {
                            debug!(code = state.code(), "Embed state changed");
                            let _ = event_tx.send(Event::EmbedStateChanged(state));
                        }
                        Signal::RequestFailed { request_id, error } => {
                            debug!(?request_id, "Embed rejected request: {error}");
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::state::EmbedState;
    use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, DuplexStream};

    struct Harness {
        embed: MpvEmbed,
        event_rx: Receiver<Event>,
        server: tokio::io::Lines<BufReader<tokio::io::ReadHalf<DuplexStream>>>,
        server_tx: tokio::io::WriteHalf<DuplexStream>,
        task: JoinHandle<Result<(), EmbedError>>,
    }

    impl Harness {
        fn start() -> Self {
            let (client, server) = tokio::io::duplex(4096);
            let (command_tx, command_rx) = flume::unbounded();
            let (event_tx, event_rx) = flume::unbounded();
            let track_info = Arc::new(RwLock::new(TrackInfo::default()));
            let task = tokio::spawn(drive(
                client,
                true,
                command_rx,
                track_info.clone(),
                event_tx,
            ));
            let (server_rx, server_tx) = tokio::io::split(server);

            Self {
                embed: MpvEmbed {
                    command_tx,
                    track_info,
                },
                event_rx,
                server: BufReader::new(server_rx).lines(),
                server_tx,
                task,
            }
        }

        async fn read_command(&mut self) -> serde_json::Value {
            let line = self.server.next_line().await.unwrap().unwrap();
            serde_json::from_str(&line).unwrap()
        }

        async fn emit(&mut self, line: &str) {
            self.server_tx.write_all(line.as_bytes()).await.unwrap();
            self.server_tx.write_all(b"\n").await.unwrap();
            self.server_tx.flush().await.unwrap();
        }
    }

    #[test]
    fn hidden_paused_launch() {
        let args = launch_args(&EmbedConfig::default(), "/tmp/sock");
        assert!(args.contains(&"--no-video".to_string()));
        assert!(args.contains(&"--pause".to_string()));
        assert!(args.contains(&"--no-osc".to_string()));
        assert!(args.contains(&"--input-ipc-server=/tmp/sock".to_string()));
        assert_eq!(
            args.last().unwrap(),
            "https://www.youtube.com/playlist?list=PL9LkJszkF_Z6bJ82689htd2wch-HVbzCO"
        );
    }

    #[test]
    fn autoplay_with_controls() {
        let config = EmbedConfig {
            autoplay: true,
            show_controls: true,
            ..EmbedConfig::default()
        };
        let args = launch_args(&config, "/tmp/sock");
        assert!(!args.contains(&"--pause".to_string()));
        assert!(!args.contains(&"--no-osc".to_string()));
    }

    #[cfg(unix)]
    fn stale_socket(name: &str) -> String {
        let path = std::env::temp_dir()
            .join(format!("cassette-test-{}-{name}.sock", std::process::id()))
            .to_string_lossy()
            .into_owned();
        std::fs::write(&path, b"").unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn socket_is_removed_on_drop() {
        let path = stale_socket("drop");
        drop(SocketGuard(path.clone()));
        assert!(!std::path::Path::new(&path).exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn socket_is_removed_when_task_is_aborted() {
        let path = stale_socket("abort");
        let guard = SocketGuard(path.clone());
        let task = tokio::spawn(async move {
            let _guard = guard;
            std::future::pending::<()>().await;
        });

        task.abort();
        assert!(task.await.unwrap_err().is_cancelled());
        assert!(!std::path::Path::new(&path).exists());
    }

    #[tokio::test]
    async fn observes_properties_on_connect() {
        let mut h = Harness::start();
        let first = h.read_command().await;
        let second = h.read_command().await;
        assert_eq!(first["command"][2], "pause");
        assert_eq!(second["command"][2], "media-title");
    }

    #[tokio::test]
    async fn forwards_commands() {
        let mut h = Harness::start();
        h.read_command().await;
        h.read_command().await;

        h.embed.play();
        assert_eq!(
            h.read_command().await["command"],
            serde_json::json!(["set_property", "pause", false])
        );
        h.embed.next();
        assert_eq!(
            h.read_command().await["command"],
            serde_json::json!(["playlist-next"])
        );
        assert_eq!(
            h.read_command().await["command"],
            serde_json::json!(["set_property", "pause", false])
        );
        h.embed.previous();
        assert_eq!(
            h.read_command().await["command"],
            serde_json::json!(["playlist-prev"])
        );
        assert_eq!(
            h.read_command().await["command"],
            serde_json::json!(["set_property", "pause", false])
        );
    }

    #[tokio::test]
    async fn skip_while_paused_reports_new_track() {
        let mut h = Harness::start();
        h.read_command().await;
        h.read_command().await;
        h.emit(r#"{"event":"property-change","id":2,"name":"media-title","data":"Track One"}"#)
            .await;
        h.emit(r#"{"event":"file-loaded"}"#).await;
        assert_eq!(h.event_rx.recv_async().await.unwrap(), Event::EmbedReady);

        h.embed.next();
        h.read_command().await;
        h.read_command().await;

        h.emit(r#"{"event":"property-change","id":1,"name":"pause","data":false}"#)
            .await;
        h.emit(r#"{"event":"property-change","id":2,"name":"media-title","data":"Track Two"}"#)
            .await;

        assert_eq!(
            h.event_rx.recv_async().await.unwrap(),
            Event::EmbedStateChanged(EmbedState::Playing)
        );
        assert_eq!(
            h.event_rx.recv_async().await.unwrap(),
            Event::EmbedStateChanged(EmbedState::Playing)
        );
        assert_eq!(
            h.embed.current_track_info().title.as_deref(),
            Some("Track Two")
        );
    }

    #[tokio::test]
    async fn title_is_cached_before_ready() {
        let mut h = Harness::start();
        h.emit(r#"{"event":"property-change","id":2,"name":"media-title","data":"Track One"}"#)
            .await;
        h.emit(r#"{"event":"file-loaded"}"#).await;

        assert_eq!(h.event_rx.recv_async().await.unwrap(), Event::EmbedReady);
        assert_eq!(
            h.embed.current_track_info().title.as_deref(),
            Some("Track One")
        );

        h.emit(r#"{"event":"property-change","id":1,"name":"pause","data":false}"#)
            .await;
        assert_eq!(
            h.event_rx.recv_async().await.unwrap(),
            Event::EmbedStateChanged(EmbedState::Playing)
        );
    }

    #[tokio::test]
    async fn closed_socket_is_an_error() {
        let h = Harness::start();
        drop(h.server);
        drop(h.server_tx);
        let result = h.task.await.unwrap();
        assert!(matches!(result, Err(EmbedError::Closed) | Err(EmbedError::Ipc(_))));
    }

    #[tokio::test]
    async fn dropping_embed_stops_driver() {
        let mut h = Harness::start();
        h.read_command().await;
        h.read_command().await;

        let Harness {
            embed,
            mut server,
            task,
            ..
        } = h;
        drop(embed);
        let quit = server.next_line().await.unwrap().unwrap();
        let quit: serde_json::Value = serde_json::from_str(&quit).unwrap();
        assert_eq!(quit["command"], serde_json::json!(["quit"]));
        assert!(task.await.unwrap().is_ok());
    }
}
