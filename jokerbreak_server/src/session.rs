use jokerbreak_lib::net::frames::{GameToPlayerMessage, PlayerToGameMessage, ServerMessageFrame};
use jokerbreak_lib::rules::characters::CharacterId;
use jokerbreak_lib::rules::events::GameEvent;
use jokerbreak_lib::rules::game::Game;
use jokerbreak_lib::rules::states::PlayersData;
use jokerbreak_lib::rules::PlayerPos;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Input a session receives, routed by the lobby.
pub enum SessionMessage {
    Player {
        seat: PlayerPos,
        message: PlayerToGameMessage,
    },
    PlayerLeft {
        seat: PlayerPos,
    },
}

const SEATS: [PlayerPos; 2] = [PlayerPos::P1, PlayerPos::P2];

/// Drives one match. The session owns the `Game` outright and is the only
/// task that ever touches it; the core stays single-threaded per match.
///
/// The core defines no terminal state, so the match runs until a seat
/// disconnects.
pub async fn run_session(
    characters: PlayersData<CharacterId>,
    outgoing: PlayersData<mpsc::Sender<ServerMessageFrame>>,
    mut rx: mpsc::Receiver<SessionMessage>,
) {
    let mut game = Game::new(characters.p1, characters.p2);
    info!(
        "session started: {:?} vs {:?}",
        characters.p1, characters.p2
    );

    loop {
        let start_events = game.start_turn();
        for seat in SEATS {
            send(
                &outgoing,
                seat,
                GameToPlayerMessage::TurnStarted {
                    state: game.state_view(seat),
                },
            )
            .await;
        }
        broadcast_events(&outgoing, start_events).await;

        let Some(resolve_events) = await_and_resolve(&mut game, &outgoing, &mut rx).await else {
            return;
        };
        broadcast_events(&outgoing, resolve_events).await;

        let end_events = game.end_turn();
        broadcast_events(&outgoing, end_events).await;

        for seat in SEATS {
            send(
                &outgoing,
                seat,
                GameToPlayerMessage::StateUpdate {
                    state: game.state_view(seat),
                },
            )
            .await;
        }
    }
}

/// Collects one hand index per seat (the latest submission wins), resolving
/// once both are in. A rejected choice clears only the offending seat's
/// submission. Returns `None` when the match is over because a seat left.
async fn await_and_resolve(
    game: &mut Game,
    outgoing: &PlayersData<mpsc::Sender<ServerMessageFrame>>,
    rx: &mut mpsc::Receiver<SessionMessage>,
) -> Option<Vec<GameEvent>> {
    let mut choices: PlayersData<Option<usize>> = PlayersData::new(None, None);

    loop {
        if let (Some(p1_index), Some(p2_index)) = (choices.p1, choices.p2) {
            match game.resolve_battle(p1_index, p2_index) {
                Ok(events) => return Some(events),
                Err(rejection) => {
                    let seat = rejection.player();
                    debug!("seat {seat:?}: rejected choice: {rejection}");
                    choices[seat] = None;
                    send(outgoing, seat, GameToPlayerMessage::ChoiceRejected(rejection)).await;
                    broadcast_events(outgoing, vec![GameEvent::ChoiceRejected { player: seat }])
                        .await;
                    continue;
                }
            }
        }

        match rx.recv().await {
            Some(SessionMessage::Player { seat, message }) => match message {
                PlayerToGameMessage::ToggleMode { index } => {
                    // Toggling anything but a blank card is silently ignored.
                    if let Some(mode) = game.toggle_card_mode(seat, index) {
                        send(outgoing, seat, GameToPlayerMessage::ModeChanged { index, mode })
                            .await;
                    }
                }
                PlayerToGameMessage::SubmitCard { index } => {
                    choices[seat] = Some(index);
                }
            },
            Some(SessionMessage::PlayerLeft { seat }) => {
                info!("seat {seat:?} left, closing the session");
                send(outgoing, seat.other(), GameToPlayerMessage::OpponentLeft).await;
                return None;
            }
            // Lobby is gone; nobody is left to route input to us.
            None => return None,
        }
    }
}

async fn broadcast_events(
    outgoing: &PlayersData<mpsc::Sender<ServerMessageFrame>>,
    events: Vec<GameEvent>,
) {
    for seat in SEATS {
        send(outgoing, seat, GameToPlayerMessage::Events(events.clone())).await;
    }
}

async fn send(
    outgoing: &PlayersData<mpsc::Sender<ServerMessageFrame>>,
    seat: PlayerPos,
    message: GameToPlayerMessage,
) {
    // A failed send means the seat's writer is gone; the disconnect will
    // reach us through the lobby shortly.
    let _ = outgoing[seat].send(ServerMessageFrame::Game(message)).await;
}
