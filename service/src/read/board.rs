//! [`View`] read model definition.

use common::{label, taxonomy::Style};

use crate::domain::{
    board::{Config, RefreshDateTime, Revision},
    deal, status, Board, Deal, Status,
};

use super::Project;

/// Placeholder of a value a [`Deal`] doesn't have.
pub const NOT_AVAILABLE: &str = "N/A";

/// Key of the [`Column`] collecting [`Deal`]s with an unknown status.
pub const UNRECOGNIZED_KEY: &str = "unrecognized";

/// [`Style`] of the [`Column`] collecting [`Deal`]s with an unknown status.
pub const UNRECOGNIZED_STYLE: Style = Style {
    lane: "bg-zinc-100",
    header: "text-zinc-500",
    badge: "bg-zinc-200 text-zinc-600",
};

/// Render model of a [`Board`].
#[derive(Clone, Debug)]
pub struct View {
    /// [`Revision`] of the authoritative [`Deal`] list rendered.
    pub revision: Revision,

    /// [`RefreshDateTime`] of the authoritative [`Deal`] list rendered.
    pub refreshed_at: RefreshDateTime,

    /// Indicator whether optimistic changes are rendered.
    pub is_optimistic: bool,

    /// [`Column`]s in their rendering order.
    pub columns: Vec<Column>,

    /// Floating copy of the dragged [`Card`], following the pointer.
    pub overlay: Option<Card>,

    /// [`Rejection`] modal, if open.
    pub rejection: Option<Rejection>,
}

impl Project<()> for View {
    fn project(board: &Board, (): ()) -> Self {
        let config = board.config();
        let dragged = board.drag().active();
        let hovered = board.hovered_column();
        let grouping = board.grouping();

        let mut columns = grouping
            .iter()
            .map(|(status, deals)| Column {
                status: Some(status),
                key: status.key(),
                title: status.title(),
                style: status.style(),
                is_highlighted: hovered == Some(status),
                cards: Card::many(deals, config, dragged),
            })
            .collect::<Vec<_>>();
        if let Some(deals) = grouping.unrecognized() {
            columns.push(Column {
                status: None,
                key: UNRECOGNIZED_KEY,
                title: "Unrecognized",
                style: UNRECOGNIZED_STYLE,
                is_highlighted: false,
                cards: Card::many(deals, config, dragged),
            });
        }

        Self {
            revision: board.revision(),
            refreshed_at: board.deals().refreshed_at(),
            is_optimistic: board.deals().is_shadowed(),
            columns,
            overlay: dragged
                .and_then(|id| board.find(id))
                .map(|d| Card::new(d, config, false)),
            rejection: board.pending_rejection().map(|p| Rejection {
                deal_id: p.deal.id,
                address: p.deal.address.to_string(),
                target: p.target,
                is_dismissible: !board.is_autocomplete_interacting(),
            }),
        }
    }
}

/// Lane of a [`View`].
#[derive(Clone, Debug)]
pub struct Column {
    /// [`Status`] of this [`Column`], or [`None`] if it collects [`Deal`]s
    /// with an unknown status.
    ///
    /// Only a [`Column`] having a [`Status`] is a drop target.
    pub status: Option<Status>,

    /// Key of this [`Column`].
    pub key: &'static str,

    /// Title of this [`Column`].
    pub title: &'static str,

    /// Presentation tokens of this [`Column`].
    pub style: Style,

    /// Indicator whether the dragged card hovers this [`Column`].
    pub is_highlighted: bool,

    /// [`Card`]s of this [`Column`].
    pub cards: Vec<Card>,
}

impl Column {
    /// Returns the number of [`Deal`]s in this [`Column`].
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Action available on a [`Card`], which never starts a drag.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Affordance {
    /// Request to edit the [`Status`] of a [`Deal`].
    EditStatus,

    /// Request to view the details of a [`Deal`].
    ViewDetails,
}

/// [`Deal`] rendered in a [`Column`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Card {
    /// ID of the [`Deal`].
    pub id: deal::Id,

    /// Truncated address of the [`Deal`].
    pub address: String,

    /// Raw [`status::Key`] of the [`Deal`].
    pub status: status::Key,

    /// Human-readable label of the `status` badge.
    pub status_label: String,

    /// Badge token of the `status`, if it's a known one.
    pub badge: Option<&'static str>,

    /// Land type of the [`Deal`].
    pub land_type: Option<String>,

    /// Formatted agreed price, or [`NOT_AVAILABLE`].
    pub value: String,

    /// Formatted lot size, or [`NOT_AVAILABLE`].
    pub size: String,

    /// Creation date in `MM/DD/YYYY` format.
    pub created: String,

    /// Indicator whether this [`Card`] is the origin of the current drag.
    pub is_dragging: bool,
}

impl Card {
    /// [`Affordance`]s every [`Card`] has.
    pub const AFFORDANCES: [Affordance; 2] =
        [Affordance::EditStatus, Affordance::ViewDetails];

    /// Renders the provided [`Deal`] as a [`Card`].
    #[must_use]
    pub fn new(deal: &Deal, config: &Config, is_dragging: bool) -> Self {
        let address = deal.address.to_string();
        Self {
            id: deal.id,
            address: label::truncate(&address, config.address_max_len)
                .into_owned(),
            status: deal.status.clone(),
            status_label: deal.status.label(),
            badge: deal.known_status().map(|s| s.style().badge),
            land_type: deal.land_type.as_ref().map(ToString::to_string),
            value: deal
                .agreed_price
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.into(), |m| m.to_grouped_string()),
            size: deal
                .lot_size
                .map_or_else(|| NOT_AVAILABLE.into(), |s| s.to_string()),
            created: deal.created_at.to_date_string(),
            is_dragging,
        }
    }

    /// Renders the provided [`Deal`]s as [`Card`]s, marking the dragged one.
    fn many(
        deals: &[Deal],
        config: &Config,
        dragged: Option<deal::Id>,
    ) -> Vec<Self> {
        deals
            .iter()
            .map(|d| Self::new(d, config, dragged == Some(d.id)))
            .collect()
    }
}

/// Modal requesting a rejection reason.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rejection {
    /// ID of the rejected [`Deal`].
    pub deal_id: deal::Id,

    /// Full address of the rejected [`Deal`].
    pub address: String,

    /// [`Status`] the [`Deal`] is transitioned into.
    pub target: Status,

    /// Indicator whether this modal may be dismissed by an outside
    /// interaction.
    pub is_dismissible: bool,
}
