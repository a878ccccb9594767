/*
Covered Call Strategy

A covered call involves holding a long position in the underlying asset and selling a call option on that same asset.
This strategy provides limited upside potential but offers some downside protection in the form of the premium received for selling the call option.

Key characteristics:
- Limited profit potential
- Provides some downside protection
- Reduces the cost basis of the underlying asset
*/
