// CLI driver: generates safe-prime RSA keys and runs the two-digit text
// codec through encrypt/decrypt. Keys and ciphertexts are printed as
// decimal strings.

use anyhow::Context;
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;

use rsa_safe::{codec, decrypt, encrypt, generate_keypair, generate_safe_prime};

#[derive(Parser, Debug)]
#[command(name = "rsa-safe", about = "Textbook RSA over safe primes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a key pair from two safe primes of the given digit length
    Keygen {
        /// Decimal digits per prime factor
        #[arg(short, long, default_value_t = 100)]
        digits: u32,

        /// Public exponent
        #[arg(short, long, default_value_t = rsa_safe::DEFAULT_PUBLIC_EXPONENT)]
        exponent: u64,
    },

    /// Generate a single safe prime with the given digit length
    Prime {
        #[arg(short, long, default_value_t = 100)]
        digits: u32,
    },

    /// Encode a text message and encrypt it under a public key
    Encrypt {
        /// Message text (A-Z, space, comma, period)
        message: String,

        /// Public exponent e
        #[arg(short, long)]
        exponent: BigUint,

        /// Modulus n
        #[arg(short, long)]
        modulus: BigUint,
    },

    /// Decrypt a decimal ciphertext and decode it back to text
    Decrypt {
        /// Ciphertext as a decimal string
        ciphertext: BigUint,

        /// Private exponent d
        #[arg(short = 'k', long)]
        key: BigUint,

        /// Modulus n
        #[arg(short, long)]
        modulus: BigUint,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::from_entropy();

    match args.command {
        Command::Keygen { digits, exponent } => {
            let keypair = generate_keypair(digits, exponent, &mut rng)
                .context("key generation failed")?;
            println!("public key (e, n):");
            println!("  e = {}", keypair.public_key.e);
            println!("  n = {}", keypair.public_key.n);
            println!("private key (d, n):");
            println!("  d = {}", keypair.private_key.d);
            println!("  n = {}", keypair.private_key.n);
        }
        Command::Prime { digits } => {
            let p = generate_safe_prime(digits, &mut rng)
                .context("safe prime generation failed")?;
            println!("{p}");
        }
        Command::Encrypt {
            message,
            exponent,
            modulus,
        } => {
            let m = codec::encode(&message).context("message cannot be encoded")?;
            let c = encrypt(&m, &exponent, &modulus)
                .context("encryption failed; is the message short enough for the modulus?")?;
            println!("{c}");
        }
        Command::Decrypt {
            ciphertext,
            key,
            modulus,
        } => {
            let m = decrypt(&ciphertext, &key, &modulus).context("decryption failed")?;
            let text = codec::decode(&m).context("plaintext is not a valid encoded message")?;
            println!("{text}");
        }
    }

    Ok(())
}
