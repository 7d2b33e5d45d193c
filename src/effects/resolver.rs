//! Card effect resolution.
//!
//! Playing a card first moves it (both copies, for a cat pair) from the
//! player's hand to the discard pile, then runs the handler that the
//! dispatch table maps the card to.

use log::trace;

use crate::agents::Agent;
use crate::cards::Card;
use crate::core::{GameRng, PlayerId};
use crate::error::{Error, Result};
use crate::rules::{Others, Table};

/// Everything an effect handler may touch.
pub struct EffectContext<'a, 'g> {
    pub table: &'a mut Table,
    pub rng: &'a mut GameRng,
    /// The agent playing the card.
    pub actor: &'a mut dyn Agent,
    /// Every other agent at the table.
    pub others: &'a mut Others<'g>,
    pub player: PlayerId,
}

/// Effect of a played card, run after the card left the hand.
pub type EffectHandler = fn(&mut EffectContext<'_, '_>) -> Result<()>;

/// Dispatch table: the handler for each card type.
///
/// `None` for cards that are never played from a hand.
#[must_use]
pub fn handler(card: Card) -> Option<EffectHandler> {
    match card {
        Card::Attack => Some(attack),
        Card::Skip => Some(skip),
        Card::SeeTheFuture => Some(see_the_future),
        Card::Shuffle => Some(shuffle),
        Card::Favor => Some(favor),
        Card::Cattermelon | Card::Tacocat | Card::RainbowRalphingCat => Some(cat_steal),
        Card::Defuse | Card::ExplodingKitten => None,
    }
}

/// Discard `card` from the acting player's hand and apply its effect.
pub fn resolve(ctx: &mut EffectContext<'_, '_>, card: Card) -> Result<()> {
    let effect = handler(card).ok_or(Error::UnplayableCard { card })?;

    for _ in 0..card.copies_per_play() {
        let played = ctx.table.players[ctx.player].hand.remove(card)?;
        ctx.table.discard.push(played);
    }
    ctx.table.last_played = Some((ctx.player, card));
    trace!("{} ({}) plays {}", ctx.actor.name(), ctx.player, card);

    effect(ctx)
}

fn attack(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    ctx.table.players[ctx.player].skipping = true;
    ctx.table.pending_attacks += 1;
    Ok(())
}

fn skip(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    ctx.table.players[ctx.player].skipping = true;
    Ok(())
}

fn see_the_future(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    let depth = ctx.table.config.future_depth;
    let future = ctx.table.deck.peek(depth).collect();
    ctx.table.players[ctx.player].future_seen = future;
    Ok(())
}

fn shuffle(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    ctx.table.deck.shuffle(ctx.rng);
    ctx.table.clear_futures();
    Ok(())
}

fn favor(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    let eligible = ctx.table.eligible_targets(ctx.player);
    if eligible.is_empty() {
        // Nobody can give anything: the Favor goes back to the requester.
        if let Some(card) = ctx.table.discard.take_last(Card::Favor) {
            ctx.table.players[ctx.player].hand.add(card);
        }
        return Ok(());
    }

    let target = ctx.actor.choose_favor_target(ctx.table, ctx.player, ctx.rng)?;
    if !eligible.contains(&target) {
        return Err(Error::IllegalTarget { player: target });
    }

    let giver = ctx
        .others
        .get_mut(target)
        .ok_or(Error::IllegalTarget { player: target })?;
    let chosen = giver.give_card(ctx.table, target, ctx.player, ctx.rng)?;

    let card = ctx.table.players[target].hand.remove(chosen)?;
    ctx.table.players[ctx.player].hand.add(card);
    trace!("{} gives {} to {}", target, card, ctx.player);
    Ok(())
}

fn cat_steal(ctx: &mut EffectContext<'_, '_>) -> Result<()> {
    let eligible = ctx.table.eligible_targets(ctx.player);
    if eligible.is_empty() {
        return Ok(());
    }

    let target = ctx.actor.choose_cat_target(ctx.table, ctx.player, ctx.rng)?;
    if !eligible.contains(&target) {
        return Err(Error::IllegalTarget { player: target });
    }

    // The target has no say in which card is taken.
    let hand = &mut ctx.table.players[target].hand;
    let index = ctx.rng.index(hand.len());
    let card = hand.take_at(index).ok_or(Error::NoEligibleTarget)?;
    ctx.table.players[ctx.player].hand.add(card);
    trace!("{} steals {} from {}", ctx.player, card, target);
    Ok(())
}
