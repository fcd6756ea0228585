//! Vault Migration
//!
//! Early markets held their pool SOL directly on the data-bearing market
//! account. This permissionless, idempotent instruction moves those
//! lamports into the zero-data vault PDA where all newer markets keep
//! custody, topping the vault up to its rent floor first so a subsequent
//! full drain cannot kill it.

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::state::Market;

/// Lamports a legacy market account can hand over to its vault: anything
/// above the record's own rent floor. Zero once the account has been
/// migrated, which is what makes the instruction idempotent.
pub fn migratable_lamports(market_lamports: u64, market_rent_floor: u64) -> u64 {
    market_lamports.saturating_sub(market_rent_floor)
}

#[event]
pub struct VaultMigrated {
    pub market: Pubkey,
    pub moved_lamports: u64,
}

#[derive(Accounts)]
pub struct MigrateMarketVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(mut)]
    pub market: Account<'info, Market>,

    /// Zero-data vault PDA receiving the legacy lamports
    #[account(
        mut,
        seeds = [Market::VAULT_SEED, market.key().as_ref()],
        bump,
    )]
    pub market_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> MigrateMarketVault<'info> {
    pub fn migrate_market_vault(&mut self) -> Result<()> {
        // The vault must stay rent-exempt on its own, independent of the
        // pool lamports that claims will later drain.
        let vault_floor = Rent::get()?.minimum_balance(0);
        let vault_balance = self.market_vault.lamports();
        if vault_balance < vault_floor {
            system_program::transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    system_program::Transfer {
                        from: self.payer.to_account_info(),
                        to: self.market_vault.to_account_info(),
                    },
                ),
                vault_floor - vault_balance,
            )?;
        }

        // Move everything above the market account's own rent floor. The
        // market account is program-owned, so lamports move directly.
        let market_info = self.market.to_account_info();
        let market_floor = Rent::get()?.minimum_balance(market_info.data_len());
        let excess = migratable_lamports(market_info.lamports(), market_floor);
        if excess > 0 {
            **market_info.try_borrow_mut_lamports()? -= excess;
            **self.market_vault.to_account_info().try_borrow_mut_lamports()? += excess;
        }

        emit!(VaultMigrated {
            market: self.market.key(),
            moved_lamports: excess,
        });

        msg!("Vault migration moved {} lamports", excess);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_moves_only_pool_lamports() {
        let rent_floor = 3_340_800u64;
        let pool = 15_200_000_000u64;
        assert_eq!(migratable_lamports(rent_floor + pool, rent_floor), pool);
    }

    #[test]
    fn test_migration_is_idempotent() {
        let rent_floor = 3_340_800u64;
        let mut market_lamports = rent_floor + 15_200_000_000;
        let mut vault_lamports = 890_880u64;

        let first = migratable_lamports(market_lamports, rent_floor);
        market_lamports -= first;
        vault_lamports += first;

        // A second pass finds nothing left to move and changes nothing.
        let second = migratable_lamports(market_lamports, rent_floor);
        assert_eq!(second, 0);
        assert_eq!(market_lamports, rent_floor);
        assert_eq!(vault_lamports, 890_880 + 15_200_000_000);
    }

    #[test]
    fn test_underfunded_record_moves_nothing() {
        // A record sitting below its own rent floor must not be drained
        // further.
        assert_eq!(migratable_lamports(1_000, 3_340_800), 0);
    }
}
