/*
Collar Strategy

A collar involves holding a long position in the underlying asset, buying an out-of-the-money put option, and selling an out-of-the-money call option.
This strategy provides downside protection at the cost of limiting upside potential.

Key characteristics:
- Limited profit potential
- Provides downside protection
- Can often be implemented for little to no cost
*/
