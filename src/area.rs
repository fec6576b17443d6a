use serde::Deserialize;

use crate::npc::NpcKind;

/// One discrete scene the player can stand in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    House,
    Street,
    ProtestStreet,
    Station,
    TrainInterior,
    School,
}

/// Static per-area rules: HUD label and which NPC kinds are present.
struct AreaRules {
    label: &'static str,
    npc_kinds: &'static [NpcKind],
}

impl Area {
    pub const ALL: [Area; 6] = [
        Area::House,
        Area::Street,
        Area::ProtestStreet,
        Area::Station,
        Area::TrainInterior,
        Area::School,
    ];

    const fn rules(self) -> AreaRules {
        match self {
            Area::House => AreaRules { label: "Nolan's house", npc_kinds: &[NpcKind::Parent] },
            Area::Street => AreaRules { label: "Street", npc_kinds: &[NpcKind::Passerby] },
            Area::ProtestStreet => AreaRules {
                label: "Street (protest)",
                npc_kinds: &[NpcKind::Protester, NpcKind::Officer],
            },
            Area::Station => AreaRules { label: "Station", npc_kinds: &[NpcKind::StationAgent] },
            Area::TrainInterior => AreaRules {
                label: "On the train",
                npc_kinds: &[NpcKind::Conductor, NpcKind::Passenger],
            },
            Area::School => AreaRules { label: "School", npc_kinds: &[NpcKind::Friend] },
        }
    }

    /// Name shown in the top-left corner of the HUD.
    pub fn label(self) -> &'static str {
        self.rules().label
    }

    /// NPC kinds that are visible and interactive in this area.
    pub fn npc_kinds(self) -> &'static [NpcKind] {
        self.rules().npc_kinds
    }

    pub fn allows(self, kind: NpcKind) -> bool {
        self.npc_kinds().contains(&kind)
    }
}

impl std::fmt::Display for Area {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
