mod get_player;

use super::*;
